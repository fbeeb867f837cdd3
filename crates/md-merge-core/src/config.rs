use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{MergeError, Result};
use crate::scan::DEFAULT_EXTENSION;
use crate::template::DEFAULT_TITLE;

/// Settings that may come from a TOML file. Command-line flags override
/// whatever is set here.
///
/// ```toml
/// title = "Handbook"
/// extension = "md"
/// output = "out/handbook.md"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeConfig {
    /// Title written into the document header.
    pub title: String,
    /// Extension matched in directory mode, without the leading dot.
    pub extension: String,
    /// Output path; a fresh unique path is generated when unset.
    pub output: Option<PathBuf>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            extension: DEFAULT_EXTENSION.into(),
            output: None,
        }
    }
}

impl MergeConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| MergeError::Config(e.to_string()))
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| MergeError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }
}
