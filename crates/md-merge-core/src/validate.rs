//! Pre-flight checks on user-supplied paths.
//!
//! Everything here only stats the filesystem. Checks run in input order so
//! the first reported failure is reproducible.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MergeError, Result};

/// Reject a run that names neither files nor a directory.
pub fn validate_inputs(files: &[PathBuf], directory: Option<&Path>) -> Result<()> {
    if files.is_empty() && directory.is_none() {
        return Err(MergeError::Validation(
            "No input files or directory specified.".into(),
        ));
    }
    Ok(())
}

/// Every listed path must exist and be a regular file.
pub fn validate_input_files(files: &[PathBuf]) -> Result<()> {
    for path in files {
        validate_input_file(path)?;
    }
    Ok(())
}

fn validate_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(MergeError::FileNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(MergeError::NotAFile(path.to_path_buf()));
    }
    debug!(path = %path.display(), "input file ok");
    Ok(())
}

/// The directory must exist and be a directory.
pub fn validate_input_directory(directory: &Path) -> Result<()> {
    if !directory.exists() {
        return Err(MergeError::DirectoryNotFound(directory.to_path_buf()));
    }
    if !directory.is_dir() {
        return Err(MergeError::NotADirectory(directory.to_path_buf()));
    }
    debug!(path = %directory.display(), "input directory ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn nothing_supplied() {
        let err = validate_inputs(&[], None).unwrap_err();
        assert!(matches!(err, MergeError::Validation(_)));
    }

    #[test]
    fn either_form_is_enough() {
        validate_inputs(&[PathBuf::from("a.md")], None).unwrap();
        validate_inputs(&[], Some(Path::new("dir"))).unwrap();
    }

    #[test]
    fn existing_files_pass() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.md");
        let b = dir.path().join("b.md");
        fs::write(&a, "a").unwrap();
        fs::write(&b, "b").unwrap();
        validate_input_files(&[a, b]).unwrap();
    }

    #[test]
    fn first_failure_in_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let ok = dir.path().join("ok.md");
        fs::write(&ok, "x").unwrap();
        let missing1 = dir.path().join("missing1.md");
        let missing2 = dir.path().join("missing2.md");

        let err = validate_input_files(&[ok, missing1.clone(), missing2]).unwrap_err();
        match err {
            MergeError::FileNotFound(p) => assert_eq!(p, missing1),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_input_files(&[dir.path().to_path_buf()]).unwrap_err();
        assert!(matches!(err, MergeError::NotAFile(_)));
    }

    #[test]
    fn directory_checks() {
        let dir = tempfile::tempdir().unwrap();
        validate_input_directory(dir.path()).unwrap();

        let missing = dir.path().join("nope");
        assert!(matches!(
            validate_input_directory(&missing).unwrap_err(),
            MergeError::DirectoryNotFound(_)
        ));

        let file = dir.path().join("file.md");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            validate_input_directory(&file).unwrap_err(),
            MergeError::NotADirectory(_)
        ));
    }
}
