//! Read-only view over the bundled guide tree (`<root>/<lang>/*.md`).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{GuidanceError, GuidanceResult};
use crate::settings::{DEFAULT_LANGUAGE, GUIDE_SUFFIX};

#[derive(Debug, Clone)]
pub struct Bundle {
    root: PathBuf,
}

/// Filenames produced by [`Bundle::find_guide`], tagged with the language
/// collection they actually came from so callers can locate the source file
/// after a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub matches: Vec<String>,
    pub language: String,
}

impl Bundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List guide filenames for `language`, sorted lexicographically.
    ///
    /// An absent collection directory yields an empty list, not an error;
    /// any other filesystem failure propagates.
    pub fn list_guides(&self, language: &str) -> GuidanceResult<Vec<String>> {
        let collection = self.root.join(language);
        let entries = match fs::read_dir(&collection) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(GuidanceError::io(&collection, err)),
        };

        let mut guides = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| GuidanceError::io(&collection, err))?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name.ends_with(GUIDE_SUFFIX) {
                guides.push(name.to_string());
            }
        }

        guides.sort();
        Ok(guides)
    }

    /// Resolve `query` against `language` by case-sensitive filename prefix.
    ///
    /// When the requested collection yields no match and is not the default
    /// language, the default collection is searched instead and its result
    /// returned even if empty. The fallback is depth-one, never recursive.
    pub fn find_guide(&self, query: &str, language: &str) -> GuidanceResult<Resolution> {
        let language = if language.is_empty() {
            DEFAULT_LANGUAGE
        } else {
            language
        };

        let matches = self.matches_in(query, language)?;
        if !matches.is_empty() || language == DEFAULT_LANGUAGE {
            return Ok(Resolution {
                matches,
                language: language.to_string(),
            });
        }

        let fallback = self.matches_in(query, DEFAULT_LANGUAGE)?;
        Ok(Resolution {
            matches: fallback,
            language: DEFAULT_LANGUAGE.to_string(),
        })
    }

    /// Absolute path of a guide inside one language collection.
    pub fn guide_path(&self, language: &str, filename: &str) -> PathBuf {
        self.root.join(language).join(filename)
    }

    fn matches_in(&self, query: &str, language: &str) -> GuidanceResult<Vec<String>> {
        let guides = self.list_guides(language)?;
        Ok(guides
            .into_iter()
            .filter(|name| name.starts_with(query))
            .collect())
    }
}
