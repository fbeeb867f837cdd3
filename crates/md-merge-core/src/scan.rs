//! Recursive discovery of input files under a directory.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{MergeError, Result};

/// Extension picked up by default, without the leading dot.
pub const DEFAULT_EXTENSION: &str = "md";

/// Walks a directory tree and collects files with a given extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scanner {
    suffix: String,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::with_extension(DEFAULT_EXTENSION)
    }
}

impl Scanner {
    /// Match files named `*.<extension>`. A leading dot is accepted and ignored.
    pub fn with_extension(extension: &str) -> Self {
        Self {
            suffix: format!(".{}", extension.trim_start_matches('.')),
        }
    }

    /// The file-name suffix this scanner matches, e.g. `.md`.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(&self.suffix))
    }

    /// Every matching regular file below `directory`, sorted by full path
    /// string. An empty result is not an error.
    ///
    /// Only a failure on `directory` itself is an error. A dangling link with
    /// a matching name is listed so the read step can skip it as missing;
    /// any other unreadable entry is logged and left out.
    pub fn scan(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        for entry in WalkDir::new(directory).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(MergeError::Scan {
                        path: directory.to_path_buf(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => {
                    let dangling = e
                        .io_error()
                        .is_some_and(|err| err.kind() == io::ErrorKind::NotFound);
                    match e.path() {
                        Some(path) if dangling && self.matches(path) => {
                            found.push(path.to_path_buf());
                        }
                        _ => warn!("Skipping unreadable entry under {}: {e}", directory.display()),
                    }
                    continue;
                }
            };
            if entry.file_type().is_file() && self.matches(entry.path()) {
                found.push(entry.into_path());
            }
        }
        found.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        debug!(
            directory = %directory.display(),
            count = found.len(),
            suffix = %self.suffix,
            "directory scan complete"
        );
        Ok(found)
    }
}

/// Recursively find `.md` files under `directory` in lexicographic order.
pub fn find_markdown_files(directory: &Path) -> Result<Vec<PathBuf>> {
    Scanner::default().scan(directory)
}
