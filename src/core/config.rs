//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tippy/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::calculator::{
    DEFAULT_PEOPLE, DEFAULT_TIP_PERCENT, MAX_PEOPLE, MAX_TIP_PERCENT, MIN_PEOPLE, MIN_TIP_PERCENT,
};
use crate::core::currency::CurrencyFormat;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TippyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub currency: CurrencyConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_tip_percent: Option<f64>,
    pub default_people: Option<u32>,
    pub show_split_on_start: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CurrencyConfig {
    pub symbol: Option<String>,
    pub thousands_separator: Option<String>,
    pub decimal_separator: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Initial amount field contents ("" unless --amount was given).
    pub amount_text: String,
    pub tip_percent: f64,
    pub people: u32,
    pub show_split: bool,
    pub currency: CurrencyFormat,
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

/// Returns the path to `~/.tippy/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tippy").join("config.toml"))
}

/// Load config from `~/.tippy/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TippyConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TippyConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TippyConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TippyConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: TippyConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Tippy Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_tip_percent = 15.0    # Starting slider position, 0 to 30
# default_people = 1            # Starting participant count, 1 to 10
# show_split_on_start = false   # Open the split section immediately

# [currency]
# symbol = "R"                  # South African Rand by default
# thousands_separator = " "
# decimal_separator = ","
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

/// CLI flag values that override everything else (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub amount: Option<String>,
    pub tip: Option<f64>,
    pub people: Option<u32>,
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TippyConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Tip percent: CLI → env → config → default, clamped to the slider range
    let tip_percent = cli
        .tip
        .or_else(|| parse_env("TIPPY_TIP_PERCENT"))
        .or(config.general.default_tip_percent)
        .unwrap_or(DEFAULT_TIP_PERCENT)
        .clamp(MIN_TIP_PERCENT, MAX_TIP_PERCENT);

    // Participant count: CLI → env → config → default, clamped likewise
    let people = cli
        .people
        .or_else(|| parse_env("TIPPY_PEOPLE"))
        .or(config.general.default_people)
        .unwrap_or(DEFAULT_PEOPLE)
        .clamp(MIN_PEOPLE, MAX_PEOPLE);

    let show_split = parse_env("TIPPY_SHOW_SPLIT")
        .or(config.general.show_split_on_start)
        .unwrap_or(false);

    let defaults = CurrencyFormat::default();
    let currency = CurrencyFormat {
        symbol: std::env::var("TIPPY_CURRENCY_SYMBOL")
            .ok()
            .or_else(|| config.currency.symbol.clone())
            .unwrap_or(defaults.symbol),
        thousands_separator: config
            .currency
            .thousands_separator
            .clone()
            .unwrap_or(defaults.thousands_separator),
        decimal_separator: config
            .currency
            .decimal_separator
            .clone()
            .unwrap_or(defaults.decimal_separator),
    };

    ResolvedConfig {
        amount_text: cli.amount.clone().unwrap_or_default(),
        tip_percent,
        people,
        show_split,
        currency,
    }
}

/// Reads and parses an env var, ignoring it when unset or malformed.
fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = TippyConfig::default();
        assert!(config.general.default_tip_percent.is_none());
        assert!(config.currency.symbol.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&TippyConfig::default(), &CliOverrides::default());
        assert_eq!(resolved.tip_percent, DEFAULT_TIP_PERCENT);
        assert_eq!(resolved.people, DEFAULT_PEOPLE);
        assert!(!resolved.show_split);
        assert_eq!(resolved.currency.symbol, "R");
        assert!(resolved.amount_text.is_empty());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = TippyConfig {
            general: GeneralConfig {
                default_tip_percent: Some(18.0),
                default_people: Some(2),
                show_split_on_start: Some(true),
            },
            currency: CurrencyConfig {
                symbol: Some("$".to_string()),
                thousands_separator: Some(",".to_string()),
                decimal_separator: Some(".".to_string()),
            },
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.tip_percent, 18.0);
        assert_eq!(resolved.people, 2);
        assert!(resolved.show_split);
        assert_eq!(resolved.currency.symbol, "$");
        assert_eq!(resolved.currency.decimal_separator, ".");
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = TippyConfig {
            general: GeneralConfig {
                default_tip_percent: Some(18.0),
                default_people: Some(2),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            amount: Some("120.50".to_string()),
            tip: Some(10.0),
            people: Some(3),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.amount_text, "120.50");
        assert_eq!(resolved.tip_percent, 10.0);
        assert_eq!(resolved.people, 3);
    }

    #[test]
    fn test_resolve_clamps_out_of_range_values() {
        let cli = CliOverrides {
            amount: None,
            tip: Some(95.0),
            people: Some(40),
        };
        let resolved = resolve(&TippyConfig::default(), &cli);
        assert_eq!(resolved.tip_percent, MAX_TIP_PERCENT);
        assert_eq!(resolved.people, MAX_PEOPLE);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_tip_percent = 12.5
default_people = 4

[currency]
symbol = "€"
"#;
        let config: TippyConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_tip_percent, Some(12.5));
        assert_eq!(config.general.default_people, Some(4));
        assert!(config.general.show_split_on_start.is_none());
        assert_eq!(config.currency.symbol.as_deref(), Some("€"));
        assert!(config.currency.decimal_separator.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
default_people = 6
"#;
        let config: TippyConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_people, Some(6));
        assert!(config.general.default_tip_percent.is_none());
        assert!(config.currency.symbol.is_none());
    }
}
