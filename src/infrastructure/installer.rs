//! Installer backed by the external installer program
//!
//! Each operation runs the resolved program once:
//!
//! | operation            | invocation                         |
//! |----------------------|------------------------------------|
//! | `install`            | `installer install` (config JSON on stdin) |
//! | `update`             | `installer update`                 |
//! | `list_agents`        | `installer list`                   |
//! | `show_status`        | `installer status`                 |
//! | `available_agents`   | `installer agents --json`          |

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::Output;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{AgentDescriptor, InstallConfig};
use crate::infrastructure::traits::{CommandRunner, Installer};

/// Destination for relayed installer output.
pub type OutputSink = Arc<Mutex<dyn Write + Send>>;

/// Installer that delegates to an external program.
pub struct ProcessInstaller {
    program: PathBuf,
    cmd: Arc<dyn CommandRunner>,
    stdout: OutputSink,
    stderr: OutputSink,
}

impl ProcessInstaller {
    /// Relay installer output to this process's stdout and stderr.
    pub fn new(program: impl Into<PathBuf>, cmd: Arc<dyn CommandRunner>) -> Self {
        Self::with_output(
            program,
            cmd,
            Arc::new(Mutex::new(io::stdout())),
            Arc::new(Mutex::new(io::stderr())),
        )
    }

    /// Relay installer output to the given sinks.
    pub fn with_output(
        program: impl Into<PathBuf>,
        cmd: Arc<dyn CommandRunner>,
        stdout: OutputSink,
        stderr: OutputSink,
    ) -> Self {
        Self {
            program: program.into(),
            cmd,
            stdout,
            stderr,
        }
    }

    /// Run the installer; on failure its complaint becomes the error.
    fn invoke(
        &self,
        operation: &'static str,
        args: &[&str],
        stdin: Option<&str>,
    ) -> ApplicationResult<Output> {
        let program = self.program.to_string_lossy();
        debug!("invoke: {} {:?}", program, args);

        let output = match stdin {
            Some(input) => self.cmd.run_with_stdin(&program, args, input),
            None => self.cmd.run(&program, args),
        }
        .with_path_context("run installer", &self.program)?;

        if !output.status.success() {
            return Err(failure(operation, &output));
        }
        Ok(output)
    }

    /// Run the installer and pass its stdout and stderr through to ours.
    fn invoke_and_relay(
        &self,
        operation: &'static str,
        args: &[&str],
        stdin: Option<&str>,
    ) -> ApplicationResult<()> {
        let output = self.invoke(operation, args, stdin)?;
        relay(&self.stdout, &output.stdout)
            .and_then(|_| relay(&self.stderr, &output.stderr))
            .with_context("write installer output")
    }
}

fn relay(sink: &OutputSink, bytes: &[u8]) -> io::Result<()> {
    let mut sink = sink.lock().unwrap_or_else(PoisonError::into_inner);
    sink.write_all(bytes)?;
    sink.flush()
}

fn failure(operation: &'static str, output: &Output) -> ApplicationError {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let message = stderr.trim();
    if message.is_empty() {
        let status = output
            .status
            .code()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        ApplicationError::installer(operation, format!("installer exited with status {status}"))
    } else {
        ApplicationError::installer(operation, message)
    }
}

impl Installer for ProcessInstaller {
    #[instrument(skip(self))]
    fn install(&self, config: &InstallConfig) -> ApplicationResult<()> {
        let payload = serde_json::to_string(config).map_err(|e| {
            ApplicationError::OperationFailed {
                context: "encode install config".to_string(),
                source: Box::new(e),
            }
        })?;
        self.invoke_and_relay("install", &["install"], Some(&payload))
    }

    #[instrument(skip(self))]
    fn update(&self) -> ApplicationResult<()> {
        self.invoke_and_relay("update", &["update"], None)
    }

    #[instrument(skip(self))]
    fn list_agents(&self) -> ApplicationResult<()> {
        self.invoke_and_relay("list", &["list"], None)
    }

    #[instrument(skip(self))]
    fn show_status(&self) -> ApplicationResult<()> {
        self.invoke_and_relay("status", &["status"], None)
    }

    #[instrument(skip(self))]
    fn available_agents(&self) -> ApplicationResult<Vec<AgentDescriptor>> {
        let output = self.invoke("agents", &["agents", "--json"], None)?;
        // stdout is the agent list; only stderr is shown
        relay(&self.stderr, &output.stderr).with_context("write installer output")?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let agents: Vec<AgentDescriptor> = serde_json::from_str(&stdout).map_err(|e| {
            ApplicationError::installer("agents", format!("unreadable agent list: {e}"))
        })?;
        debug!("available_agents: {} agents", agents.len());
        Ok(agents)
    }
}
