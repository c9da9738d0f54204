//! Note command handler
//!
//! Notes live on the courts view, so a successful delete refreshes that
//! view.

use super::{perform_action, CommandArgs, CommandHandler};
use crate::actions::ActionKind;
use anyhow::Result;
use std::future::Future;
use std::pin::Pin;

#[derive(Debug)]
pub struct NoteHandler;

impl CommandHandler for NoteHandler {
    fn execute(&self, args: CommandArgs) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
        Box::pin(async move {
            match args.args.first().map(|s| s.as_str()) {
                Some("delete") | Some("remove") => {
                    let Some(id) = args.args.get(1) else {
                        println!("Usage: docket note delete <note-id>");
                        return Ok(());
                    };
                    perform_action(ActionKind::DeleteNote, id).await
                }
                _ => {
                    println!("Unknown note command. Available commands: delete");
                    Ok(())
                }
            }
        })
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "note" || command == "notes"
    }
}
