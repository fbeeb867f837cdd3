use std::process::ExitCode;

use md_merge_core::{ErrorCategory, MergeError};
use tracing::error;

/// Process exit statuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorCode {
    Success = 0,
    ValidationError = 1,
    FileError = 2,
    ProcessingError = 3,
    ApplicationError = 4,
    UnexpectedError = 10,
}

impl ErrorCode {
    /// Exit status for an error reaching the top of the program.
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<MergeError>().map(MergeError::category) {
            Some(ErrorCategory::Validation) => Self::ValidationError,
            Some(ErrorCategory::Path) => Self::FileError,
            Some(ErrorCategory::Processing) => Self::ProcessingError,
            Some(ErrorCategory::Application) => Self::ApplicationError,
            None => Self::UnexpectedError,
        }
    }

    /// Prefix of the error line logged for this status.
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::ValidationError => "Validation Error",
            Self::FileError => "File/Directory Error",
            Self::ProcessingError => "File Processing Error",
            Self::ApplicationError => "Application Error",
            Self::UnexpectedError => "An unexpected error occurred",
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ErrorCode> for ExitCode {
    fn from(code: ErrorCode) -> Self {
        ExitCode::from(code.code())
    }
}

/// Log one line for a fatal error and pick the exit status.
pub fn report(err: &anyhow::Error) -> ErrorCode {
    let code = ErrorCode::for_error(err);
    error!("{}: {err:#}", code.label());
    code
}
