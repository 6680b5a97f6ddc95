use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

pub const DEFAULT_BASE_URL: &str = "https://api.weatherstack.com/current";

/// Weather provider credentials and endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: Option<String>,

    /// Overrides [`DEFAULT_BASE_URL`], e.g. to point at a proxy or a test server.
    pub base_url: Option<String>,
}

/// HTTP transport settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Whole-request deadline. Unset means the transport default.
    pub timeout_secs: Option<u64>,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// [weatherstack]
/// api_key = "..."
///
/// [http]
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub weatherstack: ProviderConfig,

    #[serde(default)]
    pub http: HttpConfig,
}

impl Config {
    /// API key, or an error telling the user how to set one.
    pub fn api_key(&self) -> Result<&str> {
        self.weatherstack.api_key.as_deref().filter(|k| !k.trim().is_empty()).ok_or_else(|| {
            anyhow!(
                "No API key configured for the weather provider.\n\
                 Hint: run `wardrobe configure` and enter your weatherstack access key."
            )
        })
    }

    pub fn base_url(&self) -> &str {
        self.weatherstack.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.http.timeout_secs.filter(|s| *s > 0).map(Duration::from_secs)
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.weatherstack.api_key = Some(api_key.trim().to_string());
    }

    pub fn set_timeout_secs(&mut self, secs: Option<u64>) {
        self.http.timeout_secs = secs;
    }

    pub fn is_configured(&self) -> bool {
        self.api_key().is_ok()
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid configuration TOML")
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
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

        tracing::info!(path = %path.display(), "configuration saved");
        Ok(path)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-wardrobe", "wardrobe")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
