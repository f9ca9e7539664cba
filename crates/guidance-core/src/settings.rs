//! Resolved paths and naming constants shared across the crate.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{GuidanceError, GuidanceResult};

/// Language collection searched by default and used for the manifest.
pub const DEFAULT_LANGUAGE: &str = "en";

/// File extension a bundle entry must carry to count as a guide.
pub const GUIDE_SUFFIX: &str = ".md";

/// Marker joining the technology slug and the language code in a guide
/// filename (`vercel` + `_guide_` + `en` + `.md`).
pub const GUIDE_MARKER: &str = "_guide_";

/// Per-project directory that receives copied guides and the manifest.
pub const OUTPUT_DIR_NAME: &str = ".agent_guidance";

/// Manifest filename inside the output directory.
pub const MANIFEST_FILE_NAME: &str = "guidance_list.md";

/// Bundle directory name expected alongside the installed executable.
pub const BUNDLE_DIR_NAME: &str = "guides";

/// Paths resolved once per invocation and handed to the operation layer,
/// so tests can point everything at temporary directories.
#[derive(Clone, Debug)]
pub struct Settings {
    pub bundle_root: PathBuf,
    pub output_dir: PathBuf,
}

impl Settings {
    /// Resolve paths for a CLI invocation. The bundle ships alongside the
    /// executable unless an explicit override is given; output always lands
    /// under the working directory.
    pub fn resolve(bundle_override: Option<PathBuf>) -> GuidanceResult<Self> {
        let bundle_root = match bundle_override {
            Some(root) => root,
            None => default_bundle_root()?,
        };

        let cwd = env::current_dir().map_err(|err| GuidanceError::io(Path::new("."), err))?;

        Ok(Self {
            bundle_root,
            output_dir: cwd.join(OUTPUT_DIR_NAME),
        })
    }

    /// Explicit paths, used by tests and embedding callers.
    pub fn with_paths(bundle_root: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            bundle_root: bundle_root.into(),
            output_dir: output_dir.into(),
        }
    }
}

fn default_bundle_root() -> GuidanceResult<PathBuf> {
    let exe = env::current_exe().map_err(|err| GuidanceError::io(Path::new("."), err))?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(BUNDLE_DIR_NAME))
}
