//! User-interaction boundary
//!
//! Alerts and confirmation prompts go through the [`Ui`] trait so handlers
//! can be exercised without a terminal attached.

use anyhow::Result;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Mutex;

pub trait Ui: Send + Sync {
    /// Show a message to the user.
    fn alert(&self, message: &str);

    /// Ask a yes/no question, blocking until answered. Defaults to no.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Interactive terminal implementation.
#[derive(Debug, Default)]
pub struct TerminalUi;

impl Ui for TerminalUi {
    fn alert(&self, message: &str) {
        println!("{}", message);
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        print!("{} [y/N] ", prompt);
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        let answer = answer.trim().to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}

/// Scripted implementation used by tests in place of the terminal. Answers
/// are consumed in order; once exhausted every prompt is declined.
#[derive(Debug, Default)]
pub struct ScriptedUi {
    answers: Mutex<VecDeque<bool>>,
    alerts: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedUi {
    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Ui for ScriptedUi {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap_or_else(|e| e.into_inner()).push(message.to_string());
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).push(prompt.to_string());
        Ok(self
            .answers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or(false))
    }
}
