use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuidanceError {
    #[error("no guides found matching '{query}'")]
    NotFound { query: String },

    #[error("multiple guides match '{query}'")]
    Ambiguous { query: String, matches: Vec<String> },

    #[error("i/o error on {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl GuidanceError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type GuidanceResult<T> = Result<T, GuidanceError>;
