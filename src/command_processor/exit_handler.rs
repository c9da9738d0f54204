//! Exit command handler

use super::{CommandArgs, CommandHandler};
use anyhow::Result;
use std::future::Future;
use std::pin::Pin;

#[derive(Debug)]
pub struct ExitHandler;

impl CommandHandler for ExitHandler {
    fn execute(&self, _args: CommandArgs) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
        Box::pin(async move {
            println!("Goodbye!");
            std::process::exit(0);
        })
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "exit" || command == "quit"
    }
}
