//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bmad/bmad.toml`
//! 3. Environment variables: `BMAD_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{expand_env_vars, DEFAULT_INSTALL_DIR};

/// Raw settings for intermediate parsing (`None` = not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub default_directory: Option<String>,
    pub installer_bin_dir: Option<PathBuf>,
}

/// Unified configuration for bmad.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Install directory used when neither `--directory` nor a prompt answer gives one
    pub default_directory: String,
    /// Directory installer resolution starts from (default: the executable's directory)
    pub installer_bin_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_directory: DEFAULT_INSTALL_DIR.to_string(),
            installer_bin_dir: None,
        }
    }
}

/// Get the XDG config directory for bmad.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bmad").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bmad.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        self.default_directory = expand_env_vars(&self.default_directory);
        if let Some(dir) = &self.installer_bin_dir {
            self.installer_bin_dir = Some(PathBuf::from(expand_env_vars(
                dir.to_string_lossy().as_ref(),
            )));
        }
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            default_directory: overlay
                .default_directory
                .clone()
                .unwrap_or_else(|| self.default_directory.clone()),
            installer_bin_dir: overlay
                .installer_bin_dir
                .clone()
                .or_else(|| self.installer_bin_dir.clone()),
        }
    }

    /// Load settings from the global config location and the environment.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with layered precedence using an explicit global config file.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. `global_path`, when it exists
    /// 3. Environment variables: `BMAD_*` prefix
    pub fn load_from(global_path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = global_path {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;

        // Expand ~ and $VAR in path-like fields
        current.expand_paths();

        Ok(current)
    }

    /// Apply BMAD_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // `BMAD_DEFAULT_DIRECTORY`; `__` is reserved for nested keys
        let builder = Config::builder().add_source(
            Environment::with_prefix("BMAD")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("default_directory") {
            settings.default_directory = val;
        }
        if let Ok(val) = config.get_string("installer_bin_dir") {
            settings.installer_bin_dir = Some(PathBuf::from(val));
        }

        Ok(settings)
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
