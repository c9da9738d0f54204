use crate::command_processor::{preprocess_input, CommandArgs, CommandProcessor};
use anyhow::{anyhow, Result};
use clap::Parser;
use rustyline::DefaultEditor;

pub struct Application {
    command_processor: CommandProcessor,
}

impl Application {
    pub fn new() -> Self {
        Self { command_processor: CommandProcessor::new() }
    }

    /// Interactive terminal loop.
    pub async fn run(&self) -> Result<()> {
        log::info!("Starting Docket Terminal");

        let mut rl = DefaultEditor::new()?;

        println!("Welcome to Docket Terminal! Type 'help' for commands.");
        let prompt = "docket> ";

        loop {
            match rl.readline(prompt) {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    if let Err(err) = self.process_command(&line).await {
                        log::error!("Failed to process command: {:?}", err);
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Process a single command line.
    pub async fn process_command(&self, input: &str) -> Result<()> {
        let preprocessed = preprocess_input(input);
        if preprocessed.is_empty() {
            return Ok(());
        }
        log::debug!("Processing command: {}", preprocessed);

        // Try the Clap grammar first, fall back to the loose parser so
        // bare flag-style input still resolves.
        let command_args = match self.parse_command_string(&preprocessed) {
            Ok(args) => args,
            Err(_) => CommandArgs::parse(&preprocessed)?,
        };
        self.command_processor.execute(command_args).await
    }

    fn parse_command_string(&self, input: &str) -> Result<CommandArgs> {
        let mut argv =
            shell_words::split(input).map_err(|e| anyhow!("Failed to parse command: {}", e))?;
        if argv.first().map(|s| s.as_str()) != Some("docket") {
            argv.insert(0, "docket".to_string());
        }

        let cli = crate::cli::Cli::try_parse_from(&argv)
            .map_err(|e| anyhow!("Not a structured command: {}", e))?;

        crate::cli::convert_to_command_args(&cli)
            .ok_or_else(|| anyhow!("No subcommand provided"))
    }

    /// Called by the CLI entry point to execute a command from raw argv.
    pub async fn execute_from_args(&self, args: Vec<String>) -> Result<()> {
        let cli = match crate::cli::Cli::try_parse_from(&args) {
            Ok(cli) => cli,
            // help/version output and argument errors are both rendered by clap
            Err(e) => {
                e.print()?;
                return Ok(());
            }
        };
        match crate::cli::convert_to_command_args(&cli) {
            Some(command_args) => self.command_processor.execute(command_args).await,
            None => self.run().await,
        }
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}
