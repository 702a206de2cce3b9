//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults -> config file -> env vars -> CLI flags.
//!
//! Config lives at `~/.marquee/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The API key is resolved once at startup and stays constant for the
//! session. An absent or invalid key is not validated here; the server
//! answers such requests with an API-level error body.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::state::DEFAULT_SEARCH_TERM;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MarqueeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub omdb: OmdbConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_search: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OmdbConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_OMDB_BASE_URL: &str = "http://www.omdbapi.com/";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_key: String,
    pub base_url: String,
    pub search_term: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.marquee/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".marquee").join("config.toml"))
}

/// Load config from `~/.marquee/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MarqueeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MarqueeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MarqueeConfig::default());
        }
    };

    if !path.exists() {
        info!(
            "No config file found, generating default at {}",
            path.display()
        );
        generate_default_config(&path);
        return Ok(MarqueeConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MarqueeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Marquee Configuration
# All settings are optional - defaults are used for anything not specified.
# Override hierarchy: defaults -> this file -> env vars -> CLI flags.

# [general]
# default_search = "batman"

# [omdb]
# api_key = "..."                      # Or set OMDB_API_KEY env var
# base_url = "http://www.omdbapi.com/"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_search` is the `--search` flag (None = not specified).
pub fn resolve(config: &MarqueeConfig, cli_search: Option<&str>) -> ResolvedConfig {
    // Search term: CLI -> config -> default
    let search_term = cli_search
        .map(|s| s.to_string())
        .or_else(|| config.general.default_search.clone())
        .unwrap_or_else(|| DEFAULT_SEARCH_TERM.to_string());

    // API key: env -> config. A missing key is sent as-is; the server
    // answers with an API-level error body instead.
    let api_key = std::env::var("OMDB_API_KEY")
        .ok()
        .or_else(|| config.omdb.api_key.clone())
        .unwrap_or_default();
    if api_key.is_empty() {
        warn!("No OMDb API key configured (OMDB_API_KEY); searches will fail with an API error");
    }

    // Base URL: env -> config -> default
    let base_url = std::env::var("OMDB_BASE_URL")
        .ok()
        .or_else(|| config.omdb.base_url.clone())
        .unwrap_or_else(|| DEFAULT_OMDB_BASE_URL.to_string());

    ResolvedConfig {
        api_key,
        base_url,
        search_term,
    }
}
