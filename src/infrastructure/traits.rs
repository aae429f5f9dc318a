//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Output;

use colored::Colorize;

use crate::application::ApplicationResult;
use crate::domain::{AgentDescriptor, InstallConfig};

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if path is a file.
    fn is_file(&self, path: &Path) -> bool;

    /// Canonicalize path (resolve symlinks, make absolute).
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Run a command with arguments.
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output>;

    /// Run a command with arguments, feeding `stdin` and capturing output.
    fn run_with_stdin(&self, cmd: &str, args: &[&str], stdin: &str) -> io::Result<Output>;
}

/// The installer module: everything that actually touches an installation.
///
/// Errors carry the installer's own message; callers add the command prefix.
pub trait Installer: Send + Sync {
    /// Install according to `config`.
    fn install(&self, config: &InstallConfig) -> ApplicationResult<()>;

    /// Update an existing installation.
    fn update(&self) -> ApplicationResult<()>;

    /// Print the available agents.
    fn list_agents(&self) -> ApplicationResult<()>;

    /// Print the status of the current installation.
    fn show_status(&self) -> ApplicationResult<()>;

    /// Agents that can be installed individually.
    fn available_agents(&self) -> ApplicationResult<Vec<AgentDescriptor>>;
}

/// Item for selection prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionItem {
    /// Display text shown in selector
    pub display: String,
    /// Actual value (e.g., agent id)
    pub value: String,
}

/// Interactive prompting abstraction.
///
/// Every method returns `Ok(None)` when the user aborts (Esc/Ctrl-C/EOF).
pub trait Prompter: Send + Sync {
    /// Ask for free text; an empty answer yields `default`.
    fn input(&self, prompt: &str, default: &str) -> io::Result<Option<String>>;

    /// Present items to user and return selected one.
    fn select_one(&self, items: &[SelectionItem], prompt: &str)
        -> io::Result<Option<SelectionItem>>;

    /// Present items as a checklist; the result may be empty.
    fn select_many(
        &self,
        items: &[SelectionItem],
        prompt: &str,
    ) -> io::Result<Option<Vec<SelectionItem>>>;

    /// Show a validation message before a prompt is repeated.
    fn warn(&self, message: &str);
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }
}

/// Real command runner implementation.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output> {
        std::process::Command::new(cmd).args(args).output()
    }

    fn run_with_stdin(&self, cmd: &str, args: &[&str], stdin: &str) -> io::Result<Output> {
        use std::io::Write;
        use std::process::Stdio;

        let mut child = std::process::Command::new(cmd)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // A child that exits without reading closes the pipe early
        let written = match child.stdin.take() {
            Some(mut child_stdin) => child_stdin.write_all(stdin.as_bytes()),
            None => Ok(()),
        };

        let output = child.wait_with_output()?;
        match written {
            Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e),
            _ => Ok(output),
        }
    }
}

/// Terminal prompter: line input on stdin, selections via skim.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn run_skim(
        &self,
        items: &[SelectionItem],
        prompt: &str,
        multi: bool,
    ) -> io::Result<Option<Vec<SelectionItem>>> {
        use skim::prelude::*;
        use std::io::Cursor;

        if items.is_empty() {
            return Ok(None);
        }

        // Build input as newline-separated display strings
        let input = items
            .iter()
            .map(|i| i.display.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let prompt = format!("{prompt} ");
        let options = SkimOptionsBuilder::default()
            .prompt(Some(prompt.as_str()))
            .height(Some("50%"))
            .multi(multi)
            .build()
            .map_err(|e| io::Error::other(format!("build skim options: {e}")))?;

        let item_reader = SkimItemReader::default();
        let items_arc = item_reader.of_bufread(Cursor::new(input));

        match Skim::run_with(&options, Some(items_arc)) {
            Some(out) if out.is_abort => Ok(None),
            Some(out) => {
                let selected = out
                    .selected_items
                    .iter()
                    .filter_map(|s| {
                        let display = s.output().to_string();
                        items.iter().find(|i| i.display == display).cloned()
                    })
                    .collect();
                Ok(Some(selected))
            }
            None => Ok(None),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn input(&self, prompt: &str, default: &str) -> io::Result<Option<String>> {
        use std::io::{BufRead, Write};

        let mut stdout = io::stdout();
        write!(
            stdout,
            "{} {} {} ",
            "?".green(),
            prompt.bold(),
            format!("({default})").dimmed()
        )?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line.trim();
        if answer.is_empty() {
            Ok(Some(default.to_string()))
        } else {
            Ok(Some(answer.to_string()))
        }
    }

    fn select_one(
        &self,
        items: &[SelectionItem],
        prompt: &str,
    ) -> io::Result<Option<SelectionItem>> {
        Ok(self
            .run_skim(items, prompt, false)?
            .and_then(|selected| selected.into_iter().next()))
    }

    fn select_many(
        &self,
        items: &[SelectionItem],
        prompt: &str,
    ) -> io::Result<Option<Vec<SelectionItem>>> {
        self.run_skim(items, &format!("{prompt} (TAB to toggle)"), true)
    }

    fn warn(&self, message: &str) {
        eprintln!("{} {}", ">>".red(), message.yellow());
    }
}
