//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (Installer, Prompter, etc.)
//! but are themselves concrete structs, not traits.

mod wizard;

pub use wizard::{InstallWizard, AGENT_PROMPT, DIRECTORY_PROMPT, IDE_PROMPT, INSTALL_TYPE_PROMPT};
