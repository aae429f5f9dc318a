//! Integration tests for Settings layered loading

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use bmad::application::ApplicationError;
use bmad::config::Settings;

#[test]
fn given_missing_global_config_when_loading_then_uses_defaults() {
    let temp = TempDir::new().unwrap();

    let settings = Settings::load_from(Some(&temp.path().join("absent.toml"))).unwrap();

    assert_eq!(settings.installer_bin_dir, None);
}

#[test]
fn given_global_config_when_loading_then_overrides_defaults() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bmad.toml");
    fs::write(
        &path,
        r#"
installer_bin_dir = "/opt/bmad/tools/installer/bin"
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load_from(Some(&path)).unwrap();

    // Assert
    assert_eq!(
        settings.installer_bin_dir,
        Some(PathBuf::from("/opt/bmad/tools/installer/bin"))
    );
}

#[test]
fn given_tilde_in_bin_dir_when_loading_then_expands_home() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bmad.toml");
    fs::write(&path, "installer_bin_dir = \"~/bmad/bin\"\n").unwrap();

    let settings = Settings::load_from(Some(&path)).unwrap();

    let dir = settings.installer_bin_dir.unwrap();
    assert!(!dir.to_string_lossy().starts_with('~'), "{}", dir.display());
    assert!(dir.ends_with("bmad/bin"));
}

#[test]
fn given_malformed_global_config_when_loading_then_reports_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bmad.toml");
    fs::write(&path, "installer_bin_dir = [unterminated\n").unwrap();

    let err = Settings::load_from(Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_bmad_env_var_when_loading_then_beats_global_config_and_defaults() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bmad.toml");
    fs::write(&path, "default_directory = \"from-file\"\n").unwrap();
    std::env::set_var("BMAD_DEFAULT_DIRECTORY", "from-env");

    // Act
    let with_file = Settings::load_from(Some(&path));
    let without_file = Settings::load_from(None);
    std::env::remove_var("BMAD_DEFAULT_DIRECTORY");

    // Assert
    assert_eq!(with_file.unwrap().default_directory, "from-env");
    assert_eq!(without_file.unwrap().default_directory, "from-env");
}
