use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, InstallArgs};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::domain::{InstallConfig, InstallType};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Install(args)) => run_install(args, container),
        Some(Commands::Update { force, dry_run }) => run_update(*force, *dry_run, container),
        Some(Commands::List) => run_list(container),
        Some(Commands::Status) => run_status(container),
        Some(Commands::Completion { shell }) => print_completions(*shell),
        None => print_help(),
    }
}

/// Build the install parameters straight from flags.
///
/// `--agent` selects a single-agent install, otherwise it is a full one.
pub fn install_config_from_flags(args: &InstallArgs, default_directory: &str) -> InstallConfig {
    let install_type = if args.agent.is_some() {
        InstallType::SingleAgent
    } else {
        InstallType::Full
    };
    let directory = args
        .directory
        .clone()
        .unwrap_or_else(|| default_directory.to_string());

    InstallConfig::new(
        install_type,
        args.agent.clone(),
        directory,
        args.ides.iter().copied(),
    )
}

#[instrument(skip(container))]
fn run_install(args: &InstallArgs, container: &ServiceContainer) -> CliResult<()> {
    let config = if args.is_interactive() {
        output::header("\nWelcome to BMad Method Installer\n");
        container
            .install_wizard()
            .run()
            .map_err(CliError::install)?
    } else {
        let config = install_config_from_flags(args, &container.settings.default_directory);
        config
            .validate()
            .map_err(|e| CliError::install(e.into()))?;
        config
    };

    debug!("install: {:?}", config);
    container
        .installer
        .install(&config)
        .map_err(CliError::install)
}

#[instrument(skip(container))]
fn run_update(force: bool, dry_run: bool, container: &ServiceContainer) -> CliResult<()> {
    // The installer's update takes no options yet
    if force || dry_run {
        output::warning("--force and --dry-run are not passed to the installer; running a regular update");
    }
    container.installer.update().map_err(CliError::update)
}

#[instrument(skip(container))]
fn run_list(container: &ServiceContainer) -> CliResult<()> {
    container.installer.list_agents().map_err(CliError::failed)
}

#[instrument(skip(container))]
fn run_status(container: &ServiceContainer) -> CliResult<()> {
    container.installer.show_status().map_err(CliError::failed)
}

/// Write a completion script for `shell` to stdout.
pub fn print_completions(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

fn print_help() -> CliResult<()> {
    Cli::command()
        .print_help()
        .map_err(|e| InfraError::io("print help", e))?;
    println!();
    Ok(())
}
