//! Ordered assembly of the merged document.
//!
//! The [`MergeEngine`] reads each input through a [`SourceReader`], turns
//! the result into a [`ReadOutcome`], and appends surviving content after a
//! single generated header. Separators are keyed to the position of a file
//! in the original input list: every input except index 0 is preceded by a
//! separator, even when earlier inputs were skipped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::{MergeError, Result};
use crate::source::{FsSource, SourceReader};
use crate::template::{render_header, render_separator, DEFAULT_TITLE, TIMESTAMP_FORMAT};

/// Why an input was left out of the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The file did not exist at read time.
    Missing,
    /// The OS refused or failed the read.
    Unreadable(String),
}

/// An input that was skipped, with the reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Per-file result of a read attempt.
#[derive(Debug)]
pub enum ReadOutcome {
    /// The file was read and decoded.
    Content(String),
    /// The file is left out; the merge continues.
    Skipped(SkipReason),
    /// The merge must stop.
    Fatal(MergeError),
}

impl ReadOutcome {
    /// Decide what a raw read result means for the merge.
    ///
    /// `NotFound` and every other I/O failure are recoverable. Content that
    /// is not valid UTF-8 is fatal.
    pub fn classify(path: &Path, read: io::Result<Vec<u8>>) -> Self {
        match read {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(text) => Self::Content(text),
                Err(e) => Self::Fatal(MergeError::FileProcessing {
                    path: path.to_path_buf(),
                    reason: format!("content is not valid UTF-8: {e}"),
                }),
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::Skipped(SkipReason::Missing),
            Err(e) => Self::Skipped(SkipReason::Unreadable(e.to_string())),
        }
    }
}

/// The assembled document and what went into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeResult {
    /// Header plus every incorporated file.
    pub document: String,
    /// Number of inputs requested; this is the header's `file_count`.
    pub requested: usize,
    /// Number of inputs actually incorporated.
    pub merged: usize,
    /// Inputs left out, in input order.
    pub skipped: Vec<SkippedFile>,
}

/// Reads inputs in order and writes one merged document.
pub struct MergeEngine {
    reader: Arc<dyn SourceReader>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for MergeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MergeEngine").finish_non_exhaustive()
    }
}

impl Default for MergeEngine {
    fn default() -> Self {
        Self::new(Arc::new(FsSource), Arc::new(SystemClock))
    }
}

impl MergeEngine {
    pub fn new(reader: Arc<dyn SourceReader>, clock: Arc<dyn Clock>) -> Self {
        Self { reader, clock }
    }

    /// Build the merged document in memory without touching the output.
    ///
    /// The clock is sampled once, before any file is read.
    pub fn assemble(&self, inputs: &[PathBuf], title: Option<&str>) -> Result<MergeResult> {
        let timestamp = self.clock.now().format(TIMESTAMP_FORMAT).to_string();
        let title = title.unwrap_or(DEFAULT_TITLE);
        let mut document = render_header(title, &timestamp, inputs.len());
        let mut merged = 0;
        let mut skipped = Vec::new();

        for (position, path) in inputs.iter().enumerate() {
            match ReadOutcome::classify(path, self.reader.read(path)) {
                ReadOutcome::Content(text) => {
                    if position > 0 {
                        document.push_str(&render_separator(&path.display().to_string()));
                    }
                    document.push_str(&text);
                    merged += 1;
                    debug!(path = %path.display(), bytes = text.len(), "appended file");
                }
                ReadOutcome::Skipped(reason) => {
                    match &reason {
                        SkipReason::Missing => {
                            warn!("Skipping file {}: Not found.", path.display());
                        }
                        SkipReason::Unreadable(cause) => {
                            error!("Skipping file {} due to read error: {cause}", path.display());
                        }
                    }
                    skipped.push(SkippedFile {
                        path: path.clone(),
                        reason,
                    });
                }
                ReadOutcome::Fatal(err) => return Err(err),
            }
        }

        Ok(MergeResult {
            document,
            requested: inputs.len(),
            merged,
            skipped,
        })
    }

    /// Merge `inputs` into `output`, replacing any existing file there.
    ///
    /// Nothing is written when a fatal error occurs while reading.
    pub fn merge_files(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        title: Option<&str>,
    ) -> Result<MergeResult> {
        let result = self.assemble(inputs, title)?;
        write_output(output, &result.document)?;
        info!("Successfully merged content into {}", output.display());
        info!(
            requested = result.requested,
            merged = result.merged,
            skipped = result.skipped.len(),
            "Merge process completed."
        );
        Ok(result)
    }
}

/// Merge with the real filesystem and wall clock.
pub fn merge_files(inputs: &[PathBuf], output: &Path, title: Option<&str>) -> Result<MergeResult> {
    MergeEngine::default().merge_files(inputs, output, title)
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    let write_err = |source: io::Error| MergeError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, content).map_err(write_err)
}
