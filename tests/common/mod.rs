//! Mock implementations of the installer and prompter boundaries

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use bmad::application::{ApplicationError, ApplicationResult};
use bmad::domain::{AgentDescriptor, InstallConfig};
use bmad::infrastructure::traits::{Installer, Prompter, SelectionItem};

/// Installer that records every call and optionally fails all of them.
#[derive(Default)]
pub struct RecordingInstaller {
    pub calls: Mutex<Vec<&'static str>>,
    pub installed: Mutex<Vec<InstallConfig>>,
    pub agents: Vec<AgentDescriptor>,
    pub fail_with: Option<String>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_agents(agents: Vec<AgentDescriptor>) -> Self {
        Self {
            agents,
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn installed(&self) -> Vec<InstallConfig> {
        self.installed.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str) -> ApplicationResult<()> {
        self.calls.lock().unwrap().push(operation);
        match &self.fail_with {
            Some(message) => Err(ApplicationError::installer(operation, message.clone())),
            None => Ok(()),
        }
    }
}

impl Installer for RecordingInstaller {
    fn install(&self, config: &InstallConfig) -> ApplicationResult<()> {
        self.record("install")?;
        self.installed.lock().unwrap().push(config.clone());
        Ok(())
    }

    fn update(&self) -> ApplicationResult<()> {
        self.record("update")
    }

    fn list_agents(&self) -> ApplicationResult<()> {
        self.record("list")
    }

    fn show_status(&self) -> ApplicationResult<()> {
        self.record("status")
    }

    fn available_agents(&self) -> ApplicationResult<Vec<AgentDescriptor>> {
        self.record("agents")?;
        Ok(self.agents.clone())
    }
}

/// Scripted answer; `None` means the user aborted.
#[derive(Debug, Clone)]
pub enum Answer {
    Text(Option<String>),
    Pick(Option<usize>),
    Check(Option<Vec<usize>>),
}

/// Prompter replaying a fixed script and recording what was asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    script: Mutex<VecDeque<Answer>>,
    pub prompts: Mutex<Vec<String>>,
    pub shown_items: Mutex<Vec<Vec<SelectionItem>>>,
    pub warnings: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(script: Vec<Answer>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            ..Self::default()
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn shown_items(&self) -> Vec<Vec<SelectionItem>> {
        self.shown_items.lock().unwrap().clone()
    }

    fn next(&self, prompt: &str) -> io::Result<Answer> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, _default: &str) -> io::Result<Option<String>> {
        match self.next(prompt)? {
            Answer::Text(text) => Ok(text),
            other => panic!("expected text answer for '{prompt}', got {other:?}"),
        }
    }

    fn select_one(
        &self,
        items: &[SelectionItem],
        prompt: &str,
    ) -> io::Result<Option<SelectionItem>> {
        self.shown_items.lock().unwrap().push(items.to_vec());
        match self.next(prompt)? {
            Answer::Pick(idx) => Ok(idx.map(|i| items[i].clone())),
            other => panic!("expected single choice for '{prompt}', got {other:?}"),
        }
    }

    fn select_many(
        &self,
        items: &[SelectionItem],
        prompt: &str,
    ) -> io::Result<Option<Vec<SelectionItem>>> {
        self.shown_items.lock().unwrap().push(items.to_vec());
        match self.next(prompt)? {
            Answer::Check(picks) => {
                Ok(picks.map(|idx| idx.into_iter().map(|i| items[i].clone()).collect()))
            }
            other => panic!("expected checklist answer for '{prompt}', got {other:?}"),
        }
    }

    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}

pub fn agent(id: &str, name: &str, description: &str) -> AgentDescriptor {
    AgentDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}
