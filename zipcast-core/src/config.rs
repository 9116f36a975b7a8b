use anyhow::{Context, Result, anyhow, bail};
use directories::ProjectDirs;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

pub const DEFAULT_GEO_URL: &str = "https://se-weather-api.herokuapp.com/api/v1/geo";
pub const DEFAULT_FORECAST_URL: &str = "https://se-weather-api.herokuapp.com/api/v1/forecast";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// geo_url = "https://se-weather-api.herokuapp.com/api/v1/geo"
/// forecast_url = "https://se-weather-api.herokuapp.com/api/v1/forecast"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Geocoding endpoint, queried with `zip_code`.
    pub geo_url: String,

    /// Forecast endpoint, queried with `latitude`, `longitude` and `date`.
    pub forecast_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geo_url: DEFAULT_GEO_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
        }
    }
}

impl Config {
    pub fn set_geo_url(&mut self, url: &str) -> Result<()> {
        self.geo_url = parse_endpoint(url)?;
        Ok(())
    }

    pub fn set_forecast_url(&mut self, url: &str) -> Result<()> {
        self.forecast_url = parse_endpoint(url)?;
        Ok(())
    }

    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        parse_endpoint(&cfg.geo_url).context("Invalid geo_url")?;
        parse_endpoint(&cfg.forecast_url).context("Invalid forecast_url")?;
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "zipcast", "zipcast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Endpoints must be absolute http(s) URLs.
fn parse_endpoint(url: &str) -> Result<String> {
    let parsed = Url::parse(url.trim()).with_context(|| format!("'{url}' is not a valid URL"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("'{url}' must use http or https");
    }
    Ok(parsed.to_string())
}
