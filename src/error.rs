//! Error taxonomy for the analyzer
//!
//! Two failure classes reach the user: a bad entry argument (detected before
//! the tracer runs) and a tracer failure (propagated with its original
//! message). Everything downstream of a successful trace is total.

use thiserror::Error;

use crate::trace::TraceError;

/// Exit status for tracer failures
pub const EXIT_TRACE_FAILURE: u8 = 1;

/// Exit status for malformed arguments or configuration
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Errors surfaced by an analysis run
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Invalid entry path: {0}")]
    InvalidPath(String),

    #[error(transparent)]
    Trace(#[from] TraceError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AnalyzeError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            AnalyzeError::Trace(_) => EXIT_TRACE_FAILURE,
            AnalyzeError::InvalidPath(_) | AnalyzeError::Config(_) => EXIT_INVALID_INPUT,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
