use color_eyre::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Catalog used when neither the command line nor the config file names one
pub const DEFAULT_CATALOG: &str = "endpoints.toml";

/// Settings read from `~/.config/apidoc-tryit/config.toml`.
///
/// The file is only ever read. The token has no entry here and is never
/// written anywhere.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    /// API base URL for test calls
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file path or http(s) URL
    pub source: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        // Use ~/.config instead of platform-specific directory
        let home_dir = dirs::home_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find home directory"))?;

        Ok(home_dir
            .join(".config")
            .join("apidoc-tryit")
            .join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// First non-empty of: command line, config file, bundled default
    pub fn catalog_source(&self, cli: Option<&str>) -> String {
        let given = |s: &&str| !s.trim().is_empty();
        cli.filter(given)
            .or(self.catalog.source.as_deref().filter(given))
            .unwrap_or(DEFAULT_CATALOG)
            .to_string()
    }
}
