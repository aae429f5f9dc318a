//! Domain entities: core data structures

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Directory installed into when neither a flag nor a prompt answer names one.
pub const DEFAULT_INSTALL_DIR: &str = ".bmad-core";

/// What gets installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstallType {
    /// Every agent plus the shared core
    Full,
    /// One agent and its dependencies
    SingleAgent,
}

impl InstallType {
    pub const ALL: [InstallType; 2] = [InstallType::Full, InstallType::SingleAgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            InstallType::Full => "full",
            InstallType::SingleAgent => "single-agent",
        }
    }

    /// Human-readable choice label for the interactive flow.
    pub fn label(&self) -> &'static str {
        match self {
            InstallType::Full => "Complete installation (recommended) - All agents and tools",
            InstallType::SingleAgent => "Single agent - Choose one agent to install",
        }
    }
}

impl fmt::Display for InstallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstallType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::UnknownInstallType(s.to_string()))
    }
}

/// IDE whose rule files the installer can set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ide {
    Cursor,
    ClaudeCode,
    Windsurf,
    Roo,
}

impl Ide {
    pub const ALL: [Ide; 4] = [Ide::Cursor, Ide::ClaudeCode, Ide::Windsurf, Ide::Roo];

    pub fn as_str(&self) -> &'static str {
        match self {
            Ide::Cursor => "cursor",
            Ide::ClaudeCode => "claude-code",
            Ide::Windsurf => "windsurf",
            Ide::Roo => "roo",
        }
    }

    /// Display name shown in the IDE checklist.
    pub fn label(&self) -> &'static str {
        match self {
            Ide::Cursor => "Cursor",
            Ide::ClaudeCode => "Claude Code",
            Ide::Windsurf => "Windsurf",
            Ide::Roo => "Roo Code",
        }
    }
}

impl fmt::Display for Ide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ide {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ide| ide.as_str() == s)
            .ok_or_else(|| DomainError::UnknownIde(s.to_string()))
    }
}

/// Resolved install parameters handed to the installer.
///
/// Serialized with the installer's key names: `installType`, `agent`,
/// `directory`, `ides`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallConfig {
    pub install_type: InstallType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    pub directory: String,
    /// First-seen order, no duplicates
    pub ides: Vec<Ide>,
}

impl InstallConfig {
    /// Create a config, dropping repeated IDEs while keeping their first position.
    pub fn new(
        install_type: InstallType,
        agent: Option<String>,
        directory: impl Into<String>,
        ides: impl IntoIterator<Item = Ide>,
    ) -> Self {
        Self {
            install_type,
            agent,
            directory: directory.into(),
            ides: ides.into_iter().unique().collect(),
        }
    }

    /// A single-agent install must name its agent.
    pub fn validate(&self) -> Result<(), DomainError> {
        match (self.install_type, self.agent.as_deref()) {
            (InstallType::SingleAgent, None) | (InstallType::SingleAgent, Some("")) => {
                Err(DomainError::MissingAgent)
            }
            _ => Ok(()),
        }
    }
}

/// Agent offered by the installer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl AgentDescriptor {
    /// Choice label: `<id> - <name> (<description>)`.
    pub fn choice_label(&self) -> String {
        format!("{} - {} ({})", self.id, self.name, self.description)
    }
}

/// Expand shell variables and tilde in a path-like string.
///
/// Handles `~`, `$VAR`, and `${VAR}` syntax. Unresolvable input is returned unchanged.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
