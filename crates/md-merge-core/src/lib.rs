//! Core of md-merge: turns a list of Markdown files, or a directory of
//! them, into one document.
//!
//! # Key Types
//!
//! - [`InputSpec`] -- Explicit file list and/or directory, as supplied
//! - [`MergeType`] -- Which resolution mode a run uses
//! - [`Scanner`] -- Recursive, sorted discovery of files by extension
//! - [`MergeEngine`] -- Ordered read, per-file fault isolation, output write
//! - [`MergeResult`] -- The assembled document and per-file accounting
//! - [`MergeConfig`] -- Title, extension, and output settings

pub mod clock;
pub mod config;
pub mod error;
pub mod input;
pub mod merger;
pub mod scan;
pub mod source;
pub mod template;
pub mod validate;

#[cfg(test)]
mod testlog;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::MergeConfig;
pub use error::{ErrorCategory, MergeError, Result};
pub use input::{select_merge_type, InputSpec, MergeType, ResolvedInputs};
pub use merger::{merge_files, MergeEngine, MergeResult, ReadOutcome, SkipReason, SkippedFile};
pub use scan::{find_markdown_files, Scanner, DEFAULT_EXTENSION};
pub use source::{FsSource, SourceReader};
pub use template::{
    render_header, render_separator, DEFAULT_TITLE, HEADER_TEMPLATE, SEPARATOR_TEMPLATE,
};
pub use validate::{validate_input_directory, validate_input_files, validate_inputs};
