//! The two user-facing operations: `init` and `add`.
//!
//! Each runs as one linear sequence with a single branch point and no
//! retries; every failure is terminal for the invocation. At most one file
//! is written per call.

use std::fs;
use std::path::PathBuf;

use crate::bundle::Bundle;
use crate::error::{GuidanceError, GuidanceResult};
use crate::fs::atomic_write;
use crate::manifest;
use crate::settings::{Settings, DEFAULT_LANGUAGE, MANIFEST_FILE_NAME};

pub struct Operations {
    bundle: Bundle,
    output_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The guide was copied into the output directory.
    Copied { filename: String, language: String },
    /// The destination already holds the guide; nothing was written.
    AlreadyExists { filename: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    pub manifest_path: PathBuf,
    pub guide_count: usize,
}

impl Operations {
    pub fn new(settings: Settings) -> Self {
        Self {
            bundle: Bundle::new(settings.bundle_root),
            output_dir: settings.output_dir,
        }
    }

    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }

    /// Create the output directory and regenerate the manifest from the
    /// default-language collection. Previously copied guides are untouched.
    pub fn init(&self) -> GuidanceResult<InitOutcome> {
        self.ensure_output_dir()?;

        let guides = self.bundle.list_guides(DEFAULT_LANGUAGE)?;
        let manifest_path = self.output_dir.join(MANIFEST_FILE_NAME);
        atomic_write(&manifest_path, &manifest::render(&guides))
            .map_err(|err| GuidanceError::io(&manifest_path, err))?;

        Ok(InitOutcome {
            manifest_path,
            guide_count: guides.len(),
        })
    }

    /// Resolve `query` to exactly one guide and copy it into the output
    /// directory. An existing destination file is left as-is.
    pub fn add(&self, query: &str, language: &str) -> GuidanceResult<AddOutcome> {
        let resolution = self.bundle.find_guide(query, language)?;

        let mut matches = resolution.matches;
        let filename = match matches.len() {
            0 => {
                return Err(GuidanceError::NotFound {
                    query: query.to_string(),
                })
            }
            1 => matches.remove(0),
            _ => {
                return Err(GuidanceError::Ambiguous {
                    query: query.to_string(),
                    matches,
                })
            }
        };

        self.ensure_output_dir()?;

        let destination = self.output_dir.join(&filename);
        if destination.exists() {
            return Ok(AddOutcome::AlreadyExists { filename });
        }

        let source = self.bundle.guide_path(&resolution.language, &filename);
        fs::copy(&source, &destination).map_err(|err| GuidanceError::io(&destination, err))?;

        Ok(AddOutcome::Copied {
            filename,
            language: resolution.language,
        })
    }

    fn ensure_output_dir(&self) -> GuidanceResult<()> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|err| GuidanceError::io(&self.output_dir, err))
    }
}
