use crate::actions::{run_action, ActionKind, ActionOutcome};
use crate::client::ApiClient;
use crate::config::Config;
use crate::ui::{TerminalUi, Ui};
use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

pub mod case_handler;
pub mod config_handler;
pub mod court_handler;
pub mod exit_handler;
pub mod export_handler;
pub mod help_handler;
pub mod note_handler;
pub mod user_handler;
pub mod validate_handler;
pub mod version_handler;
pub mod view_handler;

/// Command line arguments structure
#[derive(Debug, Clone)]
pub struct CommandArgs {
    pub command: String,
    pub args: Vec<String>,
    pub flags: HashMap<String, Option<String>>,
}

impl CommandArgs {
    pub fn new(command: String, args: Vec<String>, flags: HashMap<String, Option<String>>) -> Self {
        Self { command, args, flags }
    }

    /// Parses a raw input line into command, positional arguments, and
    /// `--flag [value]` pairs. A leading "docket" token is ignored.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized_input = input.replace('\u{a0}', " ");
        let tokens = shell_words::split(&normalized_input)
            .map_err(|e| anyhow!("Tokenization error: {}", e))?;
        debug!("Tokenized input: {:?}", tokens);
        if tokens.is_empty() {
            return Err(anyhow!("No command provided"));
        }
        let mut tokens_iter = tokens.into_iter();
        let first_token = tokens_iter.next().unwrap_or_default();
        let command = if first_token.eq_ignore_ascii_case("docket") {
            tokens_iter
                .next()
                .ok_or_else(|| anyhow!("No command provided after 'docket'"))?
                .to_lowercase()
        } else {
            first_token.to_lowercase()
        };
        let mut args = Vec::new();
        let mut flags = HashMap::new();
        let mut current_flag: Option<String> = None;
        for token in tokens_iter {
            if let Some(name) = token.strip_prefix("--") {
                if let Some(flag_name) = current_flag.take() {
                    flags.insert(flag_name, None);
                }
                current_flag = Some(name.to_string());
            } else if let Some(flag_name) = current_flag.take() {
                flags.insert(flag_name, Some(token));
            } else {
                args.push(token);
            }
        }
        if let Some(flag_name) = current_flag {
            flags.insert(flag_name, None);
        }
        debug!("Parsed command: {:?}, args: {:?}, flags: {:?}", command, args, flags);
        Ok(CommandArgs { command, args, flags })
    }

    pub fn flag_value(&self, name: &str) -> Option<&str> {
        self.flags.get(name).and_then(|v| v.as_deref())
    }
}

/// Standardized input preprocessing function
pub fn preprocess_input(input: &str) -> String {
    input.trim().to_string()
}

pub trait CommandHandler: Debug + Send + Sync {
    fn execute(&self, args: CommandArgs) -> Pin<Box<dyn Future<Output = Result<()>> + '_>>;
    fn can_handle(&self, command: &str) -> bool;
}

#[derive(Debug)]
pub struct CommandProcessor {
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl CommandProcessor {
    pub fn new() -> Self {
        let handlers: Vec<Box<dyn CommandHandler>> = vec![
            Box::new(case_handler::CaseHandler),
            Box::new(court_handler::CourtHandler),
            Box::new(note_handler::NoteHandler),
            Box::new(user_handler::UserHandler),
            Box::new(view_handler::ViewHandler),
            Box::new(export_handler::ExportHandler),
            Box::new(validate_handler::ValidateHandler),
            Box::new(config_handler::ConfigHandler),
            Box::new(version_handler::VersionHandler),
            Box::new(help_handler::HelpHandler),
            Box::new(exit_handler::ExitHandler),
        ];
        Self { handlers }
    }

    pub async fn execute(&self, args: CommandArgs) -> Result<()> {
        debug!("Attempting to execute command: {}", args.command);
        let command_name = args.command.clone();
        for handler in &self.handlers {
            if handler.can_handle(&command_name) {
                info!("Executing command '{}' with arguments: {:?}", command_name, args.args);
                match handler.execute(args).await {
                    Ok(()) => {
                        debug!("Command '{}' executed successfully", command_name);
                        return Ok(());
                    }
                    Err(e) => {
                        log::error!("Failed to execute command '{}': {:?}", command_name, e);
                        return Err(e);
                    }
                }
            }
        }
        warn!("Unrecognized command: {}", command_name);
        println!("Unrecognized command. Type 'help' for a list of available commands.");
        Ok(())
    }
}

impl Default for CommandProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared path for the delete/toggle handlers: run the action, surface the
/// outcome, and refresh the destination view on success. Failures end the
/// current command but never the session.
pub(crate) async fn perform_action(kind: ActionKind, id: &str) -> Result<()> {
    let config = Config::load()?;
    let client = ApiClient::new(&config.server)?;
    let ui = TerminalUi;

    match run_action(&client, &ui, kind, id).await {
        Ok(ActionOutcome::Cancelled) => Ok(()),
        Ok(ActionOutcome::Completed { destination, message }) => {
            if let Some(message) = message {
                println!("{}", message);
            }
            if let Err(err) =
                crate::views::show_view(&client, destination, &config.table.selector).await
            {
                warn!("Failed to refresh {}: {:?}", destination, err);
            }
            Ok(())
        }
        Err(err) => {
            log::error!("{} failed: {:?}", kind.spec().path, err);
            ui.alert(&err.to_string());
            Ok(())
        }
    }
}
