//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.atlas/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AtlasConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub locale: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOCALE: &str = "en";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub locale: String,
}

/// Values supplied on the command line. `None` means the flag was not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub locale: Option<String>,
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

/// Returns the path to `~/.atlas/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".atlas").join("config.toml"))
}

/// Load config from `~/.atlas/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AtlasConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AtlasConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(AtlasConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<AtlasConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(AtlasConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AtlasConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Atlas Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# locale = "en"                      # Sort order; "sv", "fi", "da", "nb" get Nordic ordering

# [source]
# base_url = "https://restcountries.com/v3.1"   # Or set ATLAS_BASE_URL
# timeout_secs = 10                              # Or set ATLAS_TIMEOUT_SECS
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &AtlasConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env<F>(config: &AtlasConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("ATLAS_BASE_URL"))
        .or_else(|| config.source.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Timeout: CLI → env → config → default. Unparseable env values are skipped.
    let timeout_secs = cli
        .timeout_secs
        .or_else(|| {
            env("ATLAS_TIMEOUT_SECS").and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(secs) => Some(secs),
                Err(e) => {
                    warn!("Ignoring ATLAS_TIMEOUT_SECS={:?}: {}", raw, e);
                    None
                }
            })
        })
        .or(config.source.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    // Locale: CLI → env → config → default
    let locale = cli
        .locale
        .clone()
        .or_else(|| env("ATLAS_LOCALE"))
        .or_else(|| config.general.locale.clone())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

    ResolvedConfig {
        base_url: base_url.trim_end_matches('/').to_string(),
        timeout: Duration::from_secs(timeout_secs),
        locale,
    }
}
