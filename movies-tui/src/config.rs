use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tmdb::{BearerToken, TmdbConfig};

/// Environment variable that takes precedence over the `token` config key.
pub const TOKEN_ENV: &str = "TMDB_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoviesConfig {
    /// Base URL of the TMDB API, e.g. "https://api.themoviedb.org/3"
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// TMDB API read access token (v4 bearer token)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub include_adult: bool,
    /// How long a cached search page is served before it is fetched again
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_toast_secs")]
    pub toast_secs: u64,
    #[serde(default = "default_error_toast_secs")]
    pub error_toast_secs: u64,
    /// Directory for `movies-tui.log`. Defaults to the platform cache dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

fn default_api_url() -> String {
    tmdb::DEFAULT_BASE_URL.to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    300
}

fn default_toast_secs() -> u64 {
    3
}

fn default_error_toast_secs() -> u64 {
    4
}

impl Default for MoviesConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
            language: default_language(),
            include_adult: false,
            cache_ttl_secs: default_cache_ttl_secs(),
            toast_secs: default_toast_secs(),
            error_toast_secs: default_error_toast_secs(),
            log_dir: None,
        }
    }
}

impl MoviesConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("movies-tui")
            .join("config.toml"))
    }

    pub fn default_log_dir() -> Result<PathBuf> {
        Ok(dirs::cache_dir()
            .context("Cannot determine cache directory")?
            .join("movies-tui"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }

    /// Token from `TMDB_TOKEN`, falling back to the config file.
    pub fn resolve_token(&self) -> Result<BearerToken> {
        let from_env = std::env::var(TOKEN_ENV).ok();
        Self::pick_token(from_env, self.token.clone())
    }

    fn pick_token(from_env: Option<String>, from_file: Option<String>) -> Result<BearerToken> {
        [from_env, from_file]
            .into_iter()
            .flatten()
            .map(BearerToken::new)
            .find(|t| !t.is_empty())
            .with_context(|| {
                format!(
                    "No TMDB token configured. Set {} or add `token = \"...\"` to the config file",
                    TOKEN_ENV
                )
            })
    }

    pub fn tmdb_config(&self, token: BearerToken) -> TmdbConfig {
        let mut config = TmdbConfig::new(token).with_base_url(self.api_url.clone());
        if !self.language.is_empty() {
            config = config.with_language(self.language.clone());
        }
        config.include_adult = self.include_adult;
        config
    }
}
