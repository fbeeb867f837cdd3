use std::io;
use std::path::PathBuf;

/// Broad class of a [`MergeError`], used by the CLI to pick an exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input specification itself is invalid.
    Validation,
    /// A pre-flight path check failed.
    Path,
    /// The merge engine failed while processing files.
    Processing,
    /// Any other application-level failure.
    Application,
}

/// Errors produced by md-merge.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// Neither a file list nor a directory was supplied, or similar misuse.
    #[error("{0}")]
    Validation(String),

    /// An explicitly listed input file does not exist.
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// An explicitly listed input exists but is not a regular file.
    #[error("input path is not a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// The input directory does not exist.
    #[error("input directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The input directory path exists but is not a directory.
    #[error("input path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A file could be read but its content could not be processed.
    #[error("failed to process {}: {reason}", .path.display())]
    FileProcessing { path: PathBuf, reason: String },

    /// The merged document could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory traversal failed part-way.
    #[error("failed to scan {}: {reason}", .path.display())]
    Scan { path: PathBuf, reason: String },

    /// Configuration file could not be loaded or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl MergeError {
    /// The error's category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) => ErrorCategory::Validation,
            Self::FileNotFound(_)
            | Self::NotAFile(_)
            | Self::DirectoryNotFound(_)
            | Self::NotADirectory(_) => ErrorCategory::Path,
            Self::FileProcessing { .. } | Self::Write { .. } => ErrorCategory::Processing,
            Self::Scan { .. } | Self::Config(_) => ErrorCategory::Application,
        }
    }
}

/// Convenience alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, MergeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        assert_eq!(
            MergeError::Validation("x".into()).category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            MergeError::FileNotFound("a.md".into()).category(),
            ErrorCategory::Path
        );
        assert_eq!(
            MergeError::NotADirectory("d".into()).category(),
            ErrorCategory::Path
        );
        assert_eq!(
            MergeError::FileProcessing {
                path: "a.md".into(),
                reason: "bad".into()
            }
            .category(),
            ErrorCategory::Processing
        );
        assert_eq!(
            MergeError::Config("bad".into()).category(),
            ErrorCategory::Application
        );
    }

    #[test]
    fn display_includes_path() {
        let err = MergeError::NotAFile("docs/dir".into());
        assert_eq!(err.to_string(), "input path is not a file: docs/dir");
    }
}
