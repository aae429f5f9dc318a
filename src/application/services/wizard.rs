//! Interactive install flow
//!
//! Gathers an `InstallConfig` by asking, in order: target directory,
//! install type, agent (single-agent only) and IDEs.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{DomainError, Ide, InstallConfig, InstallType};
use crate::infrastructure::traits::{Installer, Prompter, SelectionItem};

pub const DIRECTORY_PROMPT: &str = "Where should BMAD be installed?";
pub const INSTALL_TYPE_PROMPT: &str = "How would you like to install BMAD?";
pub const AGENT_PROMPT: &str = "Select the agent to install:";
pub const IDE_PROMPT: &str = "Which IDE(s) are you using?";

/// Service asking the user for everything `install` needs.
pub struct InstallWizard {
    prompter: Arc<dyn Prompter>,
    installer: Arc<dyn Installer>,
    default_directory: String,
}

impl InstallWizard {
    /// Create a new wizard; `default_directory` is offered at the directory prompt.
    pub fn new(
        prompter: Arc<dyn Prompter>,
        installer: Arc<dyn Installer>,
        default_directory: impl Into<String>,
    ) -> Self {
        Self {
            prompter,
            installer,
            default_directory: default_directory.into(),
        }
    }

    /// Run the full question sequence.
    #[instrument(skip(self))]
    pub fn run(&self) -> ApplicationResult<InstallConfig> {
        let directory = self.ask_directory()?;
        let install_type = self.ask_install_type()?;
        let agent = match install_type {
            InstallType::SingleAgent => Some(self.ask_agent()?),
            InstallType::Full => None,
        };
        let ides = self.ask_ides()?;

        let config = InstallConfig::new(install_type, agent, directory, ides);
        config.validate()?;
        debug!("run: collected {:?}", config);
        Ok(config)
    }

    fn ask_directory(&self) -> ApplicationResult<String> {
        let answer = self
            .prompter
            .input(DIRECTORY_PROMPT, &self.default_directory)
            .with_context("prompt for install directory")?
            .ok_or(ApplicationError::Aborted)?;

        let answer = answer.trim();
        if answer.is_empty() {
            Ok(self.default_directory.clone())
        } else {
            Ok(answer.to_string())
        }
    }

    fn ask_install_type(&self) -> ApplicationResult<InstallType> {
        let items: Vec<SelectionItem> = InstallType::ALL
            .iter()
            .map(|t| SelectionItem {
                display: t.label().to_string(),
                value: t.as_str().to_string(),
            })
            .collect();

        let selected = self
            .prompter
            .select_one(&items, INSTALL_TYPE_PROMPT)
            .with_context("prompt for install type")?
            .ok_or(ApplicationError::Aborted)?;

        Ok(selected.value.parse::<InstallType>()?)
    }

    fn ask_agent(&self) -> ApplicationResult<String> {
        let agents = self.installer.available_agents()?;
        if agents.is_empty() {
            return Err(ApplicationError::installer(
                "agents",
                "installer offers no agents to choose from",
            ));
        }

        let items: Vec<SelectionItem> = agents
            .iter()
            .map(|a| SelectionItem {
                display: a.choice_label(),
                value: a.id.clone(),
            })
            .collect();

        let selected = self
            .prompter
            .select_one(&items, AGENT_PROMPT)
            .with_context("prompt for agent")?
            .ok_or(ApplicationError::Aborted)?;

        Ok(selected.value)
    }

    /// Repeats the checklist until at least one IDE is chosen.
    fn ask_ides(&self) -> ApplicationResult<Vec<Ide>> {
        let items: Vec<SelectionItem> = Ide::ALL
            .iter()
            .map(|ide| SelectionItem {
                display: ide.label().to_string(),
                value: ide.as_str().to_string(),
            })
            .collect();

        loop {
            let selected = self
                .prompter
                .select_many(&items, IDE_PROMPT)
                .with_context("prompt for IDEs")?
                .ok_or(ApplicationError::Aborted)?;

            let ides = selected
                .iter()
                .map(|item| item.value.parse::<Ide>())
                .collect::<Result<Vec<_>, _>>()?;

            if !ides.is_empty() {
                return Ok(ides);
            }
            self.prompter
                .warn(&DomainError::EmptyIdeSelection.to_string());
        }
    }
}
