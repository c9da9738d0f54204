pub mod actions;
pub mod app;
pub mod cli;
pub mod client;
pub mod command_processor;
pub mod config;
pub mod export;
pub mod forms;
pub mod table;
pub mod ui;
pub mod validation;
pub mod version;
pub mod views;

use anyhow::Result;
use log::info;

pub async fn run() -> Result<()> {
    let app = app::Application::new();
    info!("Initializing Docket application");
    app.run().await
}

// Re-export commonly used types
pub use client::ApiClient;
pub use config::Config;
pub use table::TableSnapshot;
