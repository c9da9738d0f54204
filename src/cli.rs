use crate::command_processor::CommandArgs;
use clap::{Parser, Subcommand, ValueEnum};
use std::collections::HashMap;
use std::path::PathBuf;

/// Docket - terminal admin client for a court case-scheduling web application
#[derive(Debug, Parser)]
#[command(name = "docket")]
#[command(about = "Terminal admin client for a court case-scheduling web application", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (if not specified, enters interactive terminal mode)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage cases
    #[command(alias = "cases")]
    Case {
        #[command(subcommand)]
        action: CaseActions,
    },

    /// Manage courts
    #[command(alias = "courts")]
    Court {
        #[command(subcommand)]
        action: CourtActions,
    },

    /// Manage notes
    #[command(alias = "notes")]
    Note {
        #[command(subcommand)]
        action: NoteActions,
    },

    /// Manage users
    #[command(alias = "users")]
    User {
        #[command(subcommand)]
        action: UserActions,
    },

    /// Show a server-rendered view's table
    View {
        /// View name: home, cases, courts, users
        #[arg(required = true)]
        name: String,
    },

    /// Export a view's table to a spreadsheet file
    Export {
        /// View name: home, cases, courts, users
        #[arg(default_value = "courts")]
        view: String,

        /// Output format
        #[arg(long)]
        format: Option<ExportFormatArg>,

        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Run a form validator over supplied field values
    Validate {
        #[command(subcommand)]
        form: ValidateForms,
    },

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },

    /// Show version information
    Version,
}

#[derive(Debug, Subcommand)]
pub enum CaseActions {
    /// Delete a case (asks for confirmation)
    #[command(alias = "remove")]
    Delete {
        /// Case identifier
        #[arg(required = true)]
        id: String,
    },

    /// Show the case list
    List,
}

#[derive(Debug, Subcommand)]
pub enum CourtActions {
    /// Delete a court (asks for confirmation)
    #[command(alias = "remove")]
    Delete {
        /// Court identifier
        #[arg(required = true)]
        id: String,
    },

    /// Show the court list
    List,
}

#[derive(Debug, Subcommand)]
pub enum NoteActions {
    /// Delete a note (asks for confirmation)
    #[command(alias = "remove")]
    Delete {
        /// Note identifier
        #[arg(required = true)]
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum UserActions {
    /// Activate or deactivate a user
    Toggle {
        /// User identifier
        #[arg(required = true)]
        id: String,
    },

    /// Delete a user (asks for confirmation)
    #[command(alias = "remove")]
    Delete {
        /// User identifier
        #[arg(required = true)]
        id: String,
    },

    /// Show the user list
    List,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Xlsx,
    Csv,
}

impl ExportFormatArg {
    fn as_str(self) -> &'static str {
        match self {
            ExportFormatArg::Xlsx => "xlsx",
            ExportFormatArg::Csv => "csv",
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ValidateForms {
    /// Validate login form fields
    Login {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },

    /// Validate court form fields
    Court {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },

    /// Validate note form fields
    Note {
        /// Case select value
        #[arg(long)]
        case: Option<String>,
        /// Court select value
        #[arg(long)]
        court: Option<String>,
        /// Status: resolved, pending, rejected
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        details: Option<String>,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Time (HH:MM, 24-hour)
        #[arg(long)]
        time: Option<String>,
    },

    /// Validate user registration form fields
    User {
        #[arg(long)]
        email: Option<String>,
    },

    /// Validate case form fields
    Case {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        details: Option<String>,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigActions {
    /// Show the current configuration
    Show,

    /// Update a configuration value
    Set {
        /// Config key, e.g. server.base_url or validation.policy
        #[arg(required = true)]
        key: String,

        /// New value
        #[arg(required = true)]
        value: String,
    },
}

fn flags_from(pairs: Vec<(&str, Option<String>)>) -> HashMap<String, Option<String>> {
    pairs
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name.to_string(), Some(v))))
        .collect()
}

/// Converts a parsed Clap command to the internal CommandArgs shape the
/// handlers consume.
pub fn convert_to_command_args(cli: &Cli) -> Option<CommandArgs> {
    match cli.command.as_ref()? {
        Commands::Case { action } => Some(match action {
            CaseActions::Delete { id } => CommandArgs::new(
                "case".to_string(),
                vec!["delete".to_string(), id.clone()],
                HashMap::new(),
            ),
            CaseActions::List => CommandArgs::new(
                "case".to_string(),
                vec!["list".to_string()],
                HashMap::new(),
            ),
        }),
        Commands::Court { action } => Some(match action {
            CourtActions::Delete { id } => CommandArgs::new(
                "court".to_string(),
                vec!["delete".to_string(), id.clone()],
                HashMap::new(),
            ),
            CourtActions::List => CommandArgs::new(
                "court".to_string(),
                vec!["list".to_string()],
                HashMap::new(),
            ),
        }),
        Commands::Note { action } => Some(match action {
            NoteActions::Delete { id } => CommandArgs::new(
                "note".to_string(),
                vec!["delete".to_string(), id.clone()],
                HashMap::new(),
            ),
        }),
        Commands::User { action } => Some(match action {
            UserActions::Toggle { id } => CommandArgs::new(
                "user".to_string(),
                vec!["toggle".to_string(), id.clone()],
                HashMap::new(),
            ),
            UserActions::Delete { id } => CommandArgs::new(
                "user".to_string(),
                vec!["delete".to_string(), id.clone()],
                HashMap::new(),
            ),
            UserActions::List => CommandArgs::new(
                "user".to_string(),
                vec!["list".to_string()],
                HashMap::new(),
            ),
        }),
        Commands::View { name } => Some(CommandArgs::new(
            "view".to_string(),
            vec![name.clone()],
            HashMap::new(),
        )),
        Commands::Export { view, format, output } => {
            let mut flags = HashMap::new();
            if let Some(format) = format {
                flags.insert("format".to_string(), Some(format.as_str().to_string()));
            }
            if let Some(output) = output {
                flags.insert("output".to_string(), Some(output.display().to_string()));
            }
            Some(CommandArgs::new("export".to_string(), vec![view.clone()], flags))
        }
        Commands::Validate { form } => Some(match form {
            ValidateForms::Login { name, password } => CommandArgs::new(
                "validate".to_string(),
                vec!["login".to_string()],
                flags_from(vec![
                    ("name", name.clone()),
                    ("password", password.clone()),
                ]),
            ),
            ValidateForms::Court { title, address } => CommandArgs::new(
                "validate".to_string(),
                vec!["court".to_string()],
                flags_from(vec![("title", title.clone()), ("address", address.clone())]),
            ),
            ValidateForms::Note { case, court, status, details, date, time } => CommandArgs::new(
                "validate".to_string(),
                vec!["note".to_string()],
                flags_from(vec![
                    ("case", case.clone()),
                    ("court", court.clone()),
                    ("status", status.clone()),
                    ("details", details.clone()),
                    ("date", date.clone()),
                    ("time", time.clone()),
                ]),
            ),
            ValidateForms::User { email } => CommandArgs::new(
                "validate".to_string(),
                vec!["user".to_string()],
                flags_from(vec![("email", email.clone())]),
            ),
            ValidateForms::Case { title, details, full_name, phone } => CommandArgs::new(
                "validate".to_string(),
                vec!["case".to_string()],
                flags_from(vec![
                    ("title", title.clone()),
                    ("details", details.clone()),
                    ("full-name", full_name.clone()),
                    ("phone", phone.clone()),
                ]),
            ),
        }),
        Commands::Config { action } => Some(match action {
            ConfigActions::Show => CommandArgs::new(
                "config".to_string(),
                vec!["show".to_string()],
                HashMap::new(),
            ),
            ConfigActions::Set { key, value } => CommandArgs::new(
                "config".to_string(),
                vec!["set".to_string(), key.clone(), value.clone()],
                HashMap::new(),
            ),
        }),
        Commands::Version => {
            Some(CommandArgs::new("version".to_string(), vec![], HashMap::new()))
        }
    }
}
