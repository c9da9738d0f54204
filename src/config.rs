use crate::export::ExportFormat;
use crate::validation::PolicyKind;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub table: TableConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
    /// Cookie header value of an already-established session, e.g.
    /// "session=abc123". Authentication itself happens in the browser.
    pub session_cookie: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { base_url: "http://127.0.0.1:5000".to_string(), session_cookie: None }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ValidationConfig {
    pub policy: PolicyKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub format: ExportFormat,
    pub sheet_name: String,
    pub output_dir: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Xlsx,
            sheet_name: "Court Schedules".to_string(),
            output_dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    pub selector: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { selector: ".table".to_string() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            validation: ValidationConfig::default(),
            export: ExportConfig::default(),
            table: TableConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        // If config doesn't exist, create default
        let mut config = if config_path.exists() {
            let content =
                fs::read_to_string(&config_path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")?
        } else {
            let default_config = Config::default();
            default_config.save()?;
            default_config
        };

        // Environment override, the web application itself is .env-driven
        if let Ok(url) = std::env::var("DOCKET_SERVER_URL") {
            if !url.is_empty() {
                config.server.base_url = url;
            }
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "docket", "docket")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.base_url, "http://127.0.0.1:5000");
        assert!(config.server.session_cookie.is_none());
        assert_eq!(config.validation.policy, PolicyKind::Denylist);
        assert_eq!(config.export.format, ExportFormat::Xlsx);
        assert_eq!(config.export.sheet_name, "Court Schedules");
        assert_eq!(config.table.selector, ".table");
    }

    #[test]
    fn test_config_round_trip() -> Result<()> {
        let mut config = Config::default();
        config.server.base_url = "http://court.example.org".to_string();
        config.validation.policy = PolicyKind::SqlPatterns;
        config.export.format = ExportFormat::Csv;

        let serialized = toml::to_string_pretty(&config)?;
        let parsed: Config = toml::from_str(&serialized)?;

        assert_eq!(parsed.server.base_url, "http://court.example.org");
        assert_eq!(parsed.validation.policy, PolicyKind::SqlPatterns);
        assert_eq!(parsed.export.format, ExportFormat::Csv);
        Ok(())
    }

    #[test]
    fn test_partial_config_uses_defaults() -> Result<()> {
        let parsed: Config = toml::from_str("[server]\nbase_url = \"http://host:5000\"\n")?;
        assert_eq!(parsed.server.base_url, "http://host:5000");
        assert_eq!(parsed.table.selector, ".table");
        Ok(())
    }
}
