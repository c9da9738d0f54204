//! View command handler
//!
//! Fetches a server-rendered view and prints its table.

use super::{CommandArgs, CommandHandler};
use crate::client::ApiClient;
use crate::config::Config;
use anyhow::Result;
use std::future::Future;
use std::pin::Pin;

#[derive(Debug)]
pub struct ViewHandler;

impl CommandHandler for ViewHandler {
    fn execute(&self, args: CommandArgs) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
        Box::pin(async move {
            let Some(name) = args.args.first() else {
                println!("Usage: docket view <home|cases|courts|users>");
                return Ok(());
            };
            let Some(path) = crate::views::view_path(name) else {
                println!("Unknown view '{}'. Available views: home, cases, courts, users", name);
                return Ok(());
            };

            let config = Config::load()?;
            let client = ApiClient::new(&config.server)?;
            match crate::views::show_view(&client, path, &config.table.selector).await {
                Ok(()) => Ok(()),
                Err(e) => {
                    println!("Failed to fetch {}: {}", path, e);
                    log::error!("View fetch failed: {:?}", e);
                    Ok(())
                }
            }
        })
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "view" || command == "views"
    }
}
