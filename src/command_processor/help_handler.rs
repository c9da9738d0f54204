//! Help command handler

use super::{CommandArgs, CommandHandler};
use anyhow::Result;
use std::future::Future;
use std::pin::Pin;

#[derive(Debug)]
pub struct HelpHandler;

impl CommandHandler for HelpHandler {
    fn execute(&self, _args: CommandArgs) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
        Box::pin(async move {
            println!("Available commands:");
            println!("  case delete <id>        - Delete a case (asks for confirmation)");
            println!("  case list               - Show the case list");
            println!("  court delete <id>       - Delete a court (asks for confirmation)");
            println!("  court list              - Show the court list");
            println!("  note delete <id>        - Delete a note (asks for confirmation)");
            println!("  user toggle <id>        - Activate or deactivate a user");
            println!("  user delete <id>        - Delete a user (asks for confirmation)");
            println!("  user list               - Show the user list");
            println!("  view <name>             - Show a view: home, cases, courts, users");
            println!("  export [view]           - Export a view's table to a spreadsheet");
            println!("                            [--format xlsx|csv] [--output <dir>]");
            println!("  validate <form> ...     - Run a form validator: login, court, note,");
            println!("                            user, case; values via --<field> <value>");
            println!("  config [show]           - Show the current configuration");
            println!("  config set <key> <val>  - Update a configuration value");
            println!("  version                 - Show version information");
            println!("  help                    - Show this help");
            println!("  exit                    - Exit the application");
            Ok(())
        })
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "help" || command == "--help" || command == "-h"
    }
}
