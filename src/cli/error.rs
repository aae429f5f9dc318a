//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user, prefixed per command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("Installation failed: {0}")]
    InstallFailed(#[source] ApplicationError),

    #[error("Update failed: {0}")]
    UpdateFailed(#[source] ApplicationError),

    #[error("Error: {0}")]
    Failed(#[source] ApplicationError),

    #[error("Aborted.")]
    Aborted,
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Failure of `install`, including its interactive flow.
    pub fn install(e: ApplicationError) -> Self {
        match e {
            ApplicationError::Aborted => CliError::Aborted,
            other => CliError::InstallFailed(other),
        }
    }

    /// Failure of `update`.
    pub fn update(e: ApplicationError) -> Self {
        CliError::UpdateFailed(e)
    }

    /// Failure of `list` or `status`.
    pub fn failed(e: ApplicationError) -> Self {
        CliError::Failed(e)
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Aborted => crate::exitcode::INTERRUPTED,
            CliError::Infra(_)
            | CliError::InstallFailed(_)
            | CliError::UpdateFailed(_)
            | CliError::Failed(_) => crate::exitcode::FAILURE,
        }
    }
}
