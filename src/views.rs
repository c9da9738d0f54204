//! Server-rendered views the client fetches and re-renders
//!
//! The browser equivalents of "redirect" and "reload" become fetching the
//! destination view and rendering its table in the terminal.

use crate::client::ApiClient;
use crate::table::TableSnapshot;
use anyhow::Result;

pub const HOME: &str = "/";
pub const CASES: &str = "/view-cases";
pub const COURTS: &str = "/view-courts";
pub const USERS: &str = "/view-users";

/// Maps a user-supplied view name to its fixed path. Notes are listed on
/// the courts view.
pub fn view_path(name: &str) -> Option<&'static str> {
    match name {
        "home" => Some(HOME),
        "cases" | "case" => Some(CASES),
        "courts" | "court" | "notes" | "note" => Some(COURTS),
        "users" | "user" => Some(USERS),
        _ => None,
    }
}

/// Fetches a view and scrapes its first matching table.
pub async fn fetch_snapshot(
    client: &ApiClient,
    path: &str,
    selector: &str,
) -> Result<TableSnapshot> {
    let html = client.get_html(path).await?;
    Ok(TableSnapshot::from_html(&html, selector)?)
}

/// Fetches a view and prints its table.
pub async fn show_view(client: &ApiClient, path: &str, selector: &str) -> Result<()> {
    let snapshot = fetch_snapshot(client, path, selector).await?;
    println!("{}", snapshot.render());
    Ok(())
}
