//! Court command handler

use super::{perform_action, CommandArgs, CommandHandler};
use crate::actions::ActionKind;
use anyhow::Result;
use std::future::Future;
use std::pin::Pin;

#[derive(Debug)]
pub struct CourtHandler;

impl CommandHandler for CourtHandler {
    fn execute(&self, args: CommandArgs) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
        Box::pin(async move {
            match args.args.first().map(|s| s.as_str()) {
                Some("delete") | Some("remove") => {
                    let Some(id) = args.args.get(1) else {
                        println!("Usage: docket court delete <court-id>");
                        return Ok(());
                    };
                    perform_action(ActionKind::DeleteCourt, id).await
                }
                Some("list") => {
                    let config = crate::config::Config::load()?;
                    let client = crate::client::ApiClient::new(&config.server)?;
                    crate::views::show_view(&client, crate::views::COURTS, &config.table.selector)
                        .await
                }
                _ => {
                    println!("Unknown court command. Available commands: delete, list");
                    Ok(())
                }
            }
        })
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "court" || command == "courts"
    }
}
