//! Error types for the qbgen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::template::TemplateError;
use thiserror::Error;

/// Main error type for qbgen operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum QbError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// A question bank or template definition file could not be loaded.
    #[error("Input error: {0}")]
    InputError(String),

    /// A template could not be rendered.
    #[error("Template error: {0}")]
    TemplateError(#[from] TemplateError),

    /// A question folder could not be created or written.
    #[error("Write failed: {0}")]
    WriteError(String),

    /// The run finished but some records failed to render or write.
    #[error("{0} record(s) failed to render or write")]
    RecordsFailed(usize),
}

impl QbError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            QbError::UserError(_) => exit_codes::USER_ERROR,
            QbError::InputError(_) => exit_codes::INPUT_ERROR,
            QbError::TemplateError(_) => exit_codes::INPUT_ERROR,
            QbError::WriteError(_) => exit_codes::RECORD_FAILURE,
            QbError::RecordsFailed(_) => exit_codes::RECORD_FAILURE,
        }
    }
}

/// Result type alias for qbgen operations.
pub type Result<T> = std::result::Result<T, QbError>;
