//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// The installer reported a failure; `message` is what it said.
    #[error("{message}")]
    Installer {
        operation: &'static str,
        message: String,
    },

    #[error("prompt aborted by user")]
    Aborted,

    #[error("config error: {message}")]
    Config { message: String },

    #[error("{context}: {source}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    /// Create an installer failure for `operation`.
    pub fn installer(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Installer {
            operation,
            message: message.into(),
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
