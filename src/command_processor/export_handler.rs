//! Export command handler
//!
//! Fetches a view, scrapes its table, and writes it to a spreadsheet file
//! named with the current date and time. Any failure ends the command with
//! a generic message; the underlying error goes to the log.

use super::{CommandArgs, CommandHandler};
use crate::client::ApiClient;
use crate::config::Config;
use crate::export::ExportFormat;
use anyhow::Result;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

#[derive(Debug)]
pub struct ExportHandler;

impl CommandHandler for ExportHandler {
    fn execute(&self, args: CommandArgs) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
        Box::pin(async move {
            let name = args.args.first().map(|s| s.as_str()).unwrap_or("courts");
            let Some(path) = crate::views::view_path(name) else {
                println!("Unknown view '{}'. Available views: home, cases, courts, users", name);
                return Ok(());
            };

            let mut config = Config::load()?;
            match args.flag_value("format") {
                Some("xlsx") => config.export.format = ExportFormat::Xlsx,
                Some("csv") => config.export.format = ExportFormat::Csv,
                Some(other) => {
                    println!("Unknown export format '{}'. Supported formats: xlsx, csv", other);
                    return Ok(());
                }
                None => {}
            }
            if let Some(dir) = args.flag_value("output") {
                config.export.output_dir = Some(PathBuf::from(dir));
            }

            let client = ApiClient::new(&config.server)?;
            let exported = async {
                let snapshot =
                    crate::views::fetch_snapshot(&client, path, &config.table.selector).await?;
                Ok::<_, anyhow::Error>(crate::export::export_snapshot(snapshot, &config.export)?)
            }
            .await;

            match exported {
                Ok(written) => {
                    println!("Exported {} to {}", path, written.display());
                    Ok(())
                }
                Err(e) => {
                    log::error!("Error exporting {}: {:?}", path, e);
                    println!("An error occurred while exporting. Please try again.");
                    Ok(())
                }
            }
        })
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "export"
    }
}
