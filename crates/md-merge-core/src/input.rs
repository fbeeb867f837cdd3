//! Input specification and merge-mode selection.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MergeError, Result};
use crate::scan::Scanner;
use crate::validate::validate_inputs;

const NO_MERGE_TYPE: &str = "No valid merge type found. Please specify files or a directory.";

/// Which input-resolution strategy is active for a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MergeType {
    /// An explicit, ordered list of files.
    Files,
    /// A directory scanned recursively for matching files.
    Directory,
}

impl MergeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Files => "files",
            Self::Directory => "directory",
        }
    }
}

impl fmt::Display for MergeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the merge mode. Explicit files win over a directory; `None` and an
/// empty list are treated the same.
pub fn select_merge_type(files: Option<&[PathBuf]>, directory: Option<&Path>) -> Result<MergeType> {
    let has_files = files.is_some_and(|f| !f.is_empty());
    let merge_type = match (has_files, directory) {
        (true, _) => MergeType::Files,
        (false, Some(_)) => MergeType::Directory,
        (false, None) => return Err(MergeError::Validation(NO_MERGE_TYPE.into())),
    };
    debug!("Merge type selected: {}", merge_type.as_str().to_ascii_uppercase());
    Ok(merge_type)
}

/// What the user asked to merge. Built once from arguments and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputSpec {
    files: Vec<PathBuf>,
    directory: Option<PathBuf>,
}

impl InputSpec {
    /// Build a spec, rejecting one with neither files nor a directory.
    pub fn new(files: Vec<PathBuf>, directory: Option<PathBuf>) -> Result<Self> {
        validate_inputs(&files, directory.as_deref())?;
        Ok(Self { files, directory })
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// The mode this spec selects.
    pub fn merge_type(&self) -> Result<MergeType> {
        select_merge_type(Some(self.files.as_slice()), self.directory())
    }

    /// Turn the spec into the concrete, ordered list of paths to read.
    pub fn resolve(&self, scanner: &Scanner) -> Result<ResolvedInputs> {
        let merge_type = self.merge_type()?;
        let paths = match (merge_type, self.directory()) {
            (MergeType::Files, _) => self.files.clone(),
            (MergeType::Directory, Some(dir)) => scanner.scan(dir)?,
            (MergeType::Directory, None) => {
                return Err(MergeError::Validation(NO_MERGE_TYPE.into()))
            }
        };
        Ok(ResolvedInputs { merge_type, paths })
    }
}

/// Ordered paths to read, plus the mode that produced them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedInputs {
    pub merge_type: MergeType,
    pub paths: Vec<PathBuf>,
}

impl ResolvedInputs {
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testlog::capture;
    use std::fs;

    const NO_FILES: &[PathBuf] = &[];

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn files_selected() {
        let files = paths(&["file1.md", "file2.md"]);
        assert_eq!(select_merge_type(Some(files.as_slice()), None).unwrap(), MergeType::Files);
    }

    #[test]
    fn directory_selected() {
        let dir = Path::new("/some/directory");
        assert_eq!(
            select_merge_type(Some(NO_FILES), Some(dir)).unwrap(),
            MergeType::Directory
        );
    }

    #[test]
    fn files_take_priority() {
        let files = paths(&["a.md"]);
        let dir = Path::new("dir");
        assert_eq!(
            select_merge_type(Some(files.as_slice()), Some(dir)).unwrap(),
            MergeType::Files
        );
    }

    #[test]
    fn none_and_empty_are_equivalent() {
        let dir = Path::new("/some/dir");
        let empty = select_merge_type(Some(NO_FILES), Some(dir)).unwrap();
        let none = select_merge_type(None, Some(dir)).unwrap();
        assert_eq!(empty, none);
        assert_eq!(none, MergeType::Directory);
    }

    #[test]
    fn no_inputs_rejected() {
        for files in [None, Some(NO_FILES)] {
            let err = select_merge_type(files, None).unwrap_err();
            assert!(matches!(err, MergeError::Validation(_)));
            assert_eq!(err.to_string(), NO_MERGE_TYPE);
        }
    }

    #[test]
    fn selection_is_traced() {
        let files = paths(&["a.md"]);
        let dir = Path::new("docs");
        let (_, lines) = capture(|| {
            select_merge_type(Some(files.as_slice()), Some(dir)).unwrap();
            select_merge_type(None, Some(dir)).unwrap();
        });
        assert_eq!(
            lines,
            vec![
                "DEBUG Merge type selected: FILES".to_string(),
                "DEBUG Merge type selected: DIRECTORY".to_string(),
            ]
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(MergeType::Files.to_string(), "files");
        assert_eq!(MergeType::Directory.to_string(), "directory");
    }

    #[test]
    fn empty_spec_rejected() {
        let err = InputSpec::new(vec![], None).unwrap_err();
        assert!(matches!(err, MergeError::Validation(_)));
    }

    #[test]
    fn resolve_files_is_identity() {
        let files = paths(&["z.md", "a.md"]);
        let spec = InputSpec::new(files.clone(), Some("ignored".into())).unwrap();
        let resolved = spec.resolve(&Scanner::default()).unwrap();
        assert_eq!(resolved.merge_type, MergeType::Files);
        assert_eq!(resolved.paths, files);
    }

    #[test]
    fn resolve_directory_scans() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.md"), "b").unwrap();
        fs::write(dir.path().join("a.md"), "a").unwrap();

        let spec = InputSpec::new(vec![], Some(dir.path().to_path_buf())).unwrap();
        let resolved = spec.resolve(&Scanner::default()).unwrap();
        assert_eq!(resolved.merge_type, MergeType::Directory);
        assert_eq!(
            resolved.paths,
            vec![dir.path().join("a.md"), dir.path().join("b.md")]
        );
    }
}
