//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::{Arc, OnceLock};

use crate::application::services::InstallWizard;
use crate::config::Settings;
use crate::infrastructure::installer::ProcessInstaller;
use crate::infrastructure::resolver::InstallerModule;
use crate::infrastructure::traits::{
    CommandRunner, Installer, Prompter, RealCommandRunner, TerminalPrompter,
};

/// Container holding all application services.
///
/// The prompter is created lazily, once, on first use.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// The installer module
    pub installer: Arc<dyn Installer>,

    prompter: OnceLock<Arc<dyn Prompter>>,
}

impl ServiceContainer {
    /// Create a new service container driving the resolved installer program.
    pub fn new(settings: Settings, module: &InstallerModule) -> Self {
        let cmd: Arc<dyn CommandRunner> = Arc::new(RealCommandRunner);
        let installer = Arc::new(ProcessInstaller::new(module.program.clone(), cmd));

        Self {
            settings: Arc::new(settings),
            installer,
            prompter: OnceLock::new(),
        }
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        installer: Arc<dyn Installer>,
        prompter: Arc<dyn Prompter>,
    ) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(prompter);

        Self {
            settings: Arc::new(settings),
            installer,
            prompter: cell,
        }
    }

    /// Interactive prompter, initialised on first call.
    pub fn prompter(&self) -> Arc<dyn Prompter> {
        self.prompter
            .get_or_init(|| Arc::new(TerminalPrompter))
            .clone()
    }

    /// Wizard for installs started without `--full` or `--agent`.
    pub fn install_wizard(&self) -> InstallWizard {
        InstallWizard::new(
            self.prompter(),
            self.installer.clone(),
            self.settings.default_directory.clone(),
        )
    }
}
