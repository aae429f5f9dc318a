use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use bmad::cli::commands::{execute_command, print_completions};
use bmad::cli::{output, Cli, Commands};
use bmad::config::Settings;
use bmad::exitcode;
use bmad::infrastructure::di::ServiceContainer;
use bmad::infrastructure::resolver::{executable_dir, InstallerModule, ModuleResolver};
use bmad::infrastructure::traits::RealFileSystem;
use bmad::infrastructure::InfraError;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    // Completion needs neither settings nor the installer
    if let Some(Commands::Completion { shell }) = &cli.command {
        if let Err(e) = print_completions(*shell) {
            output::error(&e);
            process::exit(e.exit_code());
        }
        return;
    }

    let settings = Settings::load().unwrap_or_else(|e| {
        output::error(&format!("Error: {}", e));
        process::exit(exitcode::FAILURE);
    });

    let module = resolve_installer(&settings);

    if cli.version {
        output::info(&module.version);
        process::exit(exitcode::OK);
    }

    let container = ServiceContainer::new(settings, &module);

    if let Err(e) = execute_command(&cli, &container) {
        output::error(&e);
        process::exit(e.exit_code());
    }
}

/// Locate the installer module or exit before any command runs.
fn resolve_installer(settings: &Settings) -> InstallerModule {
    let anchor = match &settings.installer_bin_dir {
        Some(dir) => Ok(dir.clone()),
        None => executable_dir(),
    };
    let anchor = anchor.unwrap_or_else(|e| {
        report_unresolved(None, &InfraError::io("locate executable", e));
        process::exit(exitcode::FAILURE);
    });

    let resolver = ModuleResolver::new(Arc::new(RealFileSystem), anchor);
    resolver.resolve().unwrap_or_else(|e| {
        report_unresolved(Some(resolver.anchor().to_path_buf()), &e);
        process::exit(exitcode::FAILURE);
    })
}

fn report_unresolved(anchor: Option<PathBuf>, e: &InfraError) {
    let cwd = std::env::current_dir()
        .map(|d| d.display().to_string())
        .unwrap_or_else(|err| format!("<unavailable: {err}>"));

    output::error(
        "Error: Could not load required modules. Please ensure you are running from the correct directory.",
    );
    output::detail("Debug info:");
    if let Some(anchor) = anchor {
        output::detail(&format!("anchor: {}", anchor.display()));
    }
    output::detail(&format!("cwd: {}", cwd));
    output::detail(&format!("error: {}", e));
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -v -v -v");
            LevelFilter::TRACE
        }
    };

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmad::util::testing;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        testing::init_test_setup();
        Cli::command().debug_assert();
    }
}
