//! Config command handler

use super::{CommandArgs, CommandHandler};
use crate::config::Config;
use crate::export::ExportFormat;
use crate::validation::PolicyKind;
use anyhow::Result;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

#[derive(Debug)]
pub struct ConfigHandler;

impl CommandHandler for ConfigHandler {
    fn execute(&self, args: CommandArgs) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
        Box::pin(async move {
            match args.args.first().map(|s| s.as_str()) {
                Some("show") | None => {
                    let config = Config::load()?;
                    println!("{}", toml::to_string_pretty(&config)?);
                    Ok(())
                }
                Some("set") => {
                    let (Some(key), Some(value)) = (args.args.get(1), args.args.get(2)) else {
                        println!("Usage: docket config set <key> <value>");
                        return Ok(());
                    };
                    let mut config = Config::load()?;
                    match key.as_str() {
                        "server.base_url" => config.server.base_url = value.clone(),
                        "server.session_cookie" => {
                            config.server.session_cookie = Some(value.clone())
                        }
                        "validation.policy" => match value.as_str() {
                            "denylist" => config.validation.policy = PolicyKind::Denylist,
                            "sql-patterns" => config.validation.policy = PolicyKind::SqlPatterns,
                            _ => {
                                println!("Unknown policy '{}'. Supported: denylist, sql-patterns", value);
                                return Ok(());
                            }
                        },
                        "export.format" => match value.as_str() {
                            "xlsx" => config.export.format = ExportFormat::Xlsx,
                            "csv" => config.export.format = ExportFormat::Csv,
                            _ => {
                                println!("Unknown format '{}'. Supported: xlsx, csv", value);
                                return Ok(());
                            }
                        },
                        "export.sheet_name" => config.export.sheet_name = value.clone(),
                        "export.output_dir" => {
                            config.export.output_dir = Some(PathBuf::from(value))
                        }
                        "table.selector" => config.table.selector = value.clone(),
                        _ => {
                            println!("Unknown config key: {}", key);
                            return Ok(());
                        }
                    }
                    config.save()?;
                    println!("Updated {}", key);
                    Ok(())
                }
                Some(other) => {
                    println!("Unknown config command '{}'. Available commands: show, set", other);
                    Ok(())
                }
            }
        })
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "config"
    }
}
