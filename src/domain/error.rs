//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid install parameters.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown IDE '{0}' (expected one of: cursor, claude-code, windsurf, roo)")]
    UnknownIde(String),

    #[error("unknown install type '{0}' (expected one of: full, single-agent)")]
    UnknownInstallType(String),

    #[error("single-agent install requires an agent id")]
    MissingAgent,

    #[error("Please select at least one IDE")]
    EmptyIdeSelection,
}
