//! User command handler
//!
//! Toggling a user's active flag needs no confirmation; deleting does.

use super::{perform_action, CommandArgs, CommandHandler};
use crate::actions::ActionKind;
use anyhow::Result;
use std::future::Future;
use std::pin::Pin;

#[derive(Debug)]
pub struct UserHandler;

impl CommandHandler for UserHandler {
    fn execute(&self, args: CommandArgs) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
        Box::pin(async move {
            match args.args.first().map(|s| s.as_str()) {
                Some("toggle") => {
                    let Some(id) = args.args.get(1) else {
                        println!("Usage: docket user toggle <user-id>");
                        return Ok(());
                    };
                    perform_action(ActionKind::ToggleUserStatus, id).await
                }
                Some("delete") | Some("remove") => {
                    let Some(id) = args.args.get(1) else {
                        println!("Usage: docket user delete <user-id>");
                        return Ok(());
                    };
                    perform_action(ActionKind::DeleteUser, id).await
                }
                Some("list") => {
                    let config = crate::config::Config::load()?;
                    let client = crate::client::ApiClient::new(&config.server)?;
                    crate::views::show_view(&client, crate::views::USERS, &config.table.selector)
                        .await
                }
                _ => {
                    println!("Unknown user command. Available commands: toggle, delete, list");
                    Ok(())
                }
            }
        })
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "user" || command == "users"
    }
}
