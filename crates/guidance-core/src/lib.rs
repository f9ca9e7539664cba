//! Core logic for the agent-guidance CLI: listing and resolving bundled
//! guide documents, copying them into a project, and generating the
//! overview manifest.
//!
//! The bundle is a read-only directory tree with one subdirectory per
//! language code (`guides/en/vercel_guide_en.md`). Everything this crate
//! writes lands under the per-project output directory (`.agent_guidance`).

pub mod bundle;
pub mod error;
pub mod fs;
pub mod manifest;
pub mod ops;
pub mod settings;

pub use bundle::{Bundle, Resolution};
pub use error::{GuidanceError, GuidanceResult};
pub use ops::{AddOutcome, InitOutcome, Operations};
pub use settings::{
    Settings, DEFAULT_LANGUAGE, MANIFEST_FILE_NAME, OUTPUT_DIR_NAME,
};
