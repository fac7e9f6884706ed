//! # Configuration State
//!
//! Stores storefront configuration loaded at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     AURA_DB_PATH, AURA_STORE_NAME,                                     │
//! │     AURA_SIMULATED_LATENCY_MS, AURA_CURRENCY_SYMBOL                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │     ~/Library/Application Support/com.aura.storefront/... (macOS)      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! store_name = "Aura"
//! currency_symbol = "$"
//! simulated_latency_ms = 1000
//! free_shipping_threshold_cents = 10000
//! flat_shipping_cents = 1000
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no lock is needed.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use aura_core::{Money, ShippingPolicy, FLAT_SHIPPING_CENTS, FREE_SHIPPING_THRESHOLD_CENTS};

// =============================================================================
// Errors
// =============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Could not determine the application data directory")]
    NoDataDir,
}

// =============================================================================
// Config
// =============================================================================

/// Storefront configuration.
///
/// TOML keys are snake_case; the frontend receives camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"), default)]
pub struct ConfigState {
    /// Store name (header, page titles)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// SQLite file. `None` means the platform data directory.
    pub database_path: Option<PathBuf>,

    /// Artificial delay applied to login, register and profile updates.
    pub simulated_latency_ms: u64,

    /// Cart subtotal at which shipping becomes free.
    pub free_shipping_threshold_cents: i64,

    /// Shipping fee below the threshold.
    pub flat_shipping_cents: i64,
}

impl Default for ConfigState {
    /// Development defaults: USD, one second of simulated latency, free
    /// shipping from $100.00 and $10.00 below.
    fn default() -> Self {
        ConfigState {
            store_name: "Aura".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            database_path: None,
            simulated_latency_ms: 1000,
            free_shipping_threshold_cents: FREE_SHIPPING_THRESHOLD_CENTS,
            flat_shipping_cents: FLAT_SHIPPING_CENTS,
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`storefront.toml`), if it exists
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns defaults (with env overrides) if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            let mut config = Self::default();
            config.apply_overrides(|key| std::env::var(key).ok());
            if config.validate().is_err() {
                return Self::default();
            }
            config
        })
    }

    /// Parses a TOML file. Missing keys take their default values.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Rejects values the storefront cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::Invalid("currency_symbol must not be empty".into()));
        }

        if self.flat_shipping_cents < 0 {
            return Err(ConfigError::Invalid(
                "flat_shipping_cents must not be negative".into(),
            ));
        }

        if self.free_shipping_threshold_cents < 0 {
            return Err(ConfigError::Invalid(
                "free_shipping_threshold_cents must not be negative".into(),
            ));
        }

        if self.currency_decimals > 4 {
            return Err(ConfigError::Invalid(
                "currency_decimals must be at most 4".into(),
            ));
        }

        Ok(())
    }

    /// Applies `AURA_*` overrides read through `lookup`.
    ///
    /// Unparseable numeric values are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("AURA_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.database_path = Some(PathBuf::from(path));
        }

        if let Some(name) = lookup("AURA_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(symbol) = lookup("AURA_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(latency) = lookup("AURA_SIMULATED_LATENCY_MS") {
            match latency.parse::<u64>() {
                Ok(ms) => {
                    debug!(ms, "Overriding simulated latency from environment");
                    self.simulated_latency_ms = ms;
                }
                Err(_) => warn!(value = %latency, "Ignoring invalid AURA_SIMULATED_LATENCY_MS"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "aura", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    /// Resolves the SQLite path, creating the platform data directory when
    /// no explicit path is configured.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.aura.storefront/aura.db`
    /// - **Windows**: `%APPDATA%\aura\storefront\data\aura.db`
    /// - **Linux**: `~/.local/share/storefront/aura.db`
    pub fn resolve_database_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        let dirs = ProjectDirs::from("com", "aura", "storefront").ok_or(ConfigError::NoDataDir)?;
        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join("aura.db"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    pub fn shipping_policy(&self) -> ShippingPolicy {
        ShippingPolicy {
            free_threshold: Money::from_cents(self.free_shipping_threshold_cents),
            flat_fee: Money::from_cents(self.flat_shipping_cents),
        }
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(4999), "$49.99");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(u32::from(self.currency_decimals));
        let whole = (cents / divisor).abs();
        let frac = (cents % divisor).abs();
        let sign = if cents < 0 { "-" } else { "" };

        if self.currency_decimals == 0 {
            return format!("{}{}{}", sign, self.currency_symbol, whole);
        }

        format!(
            "{}{}{}.{:0width$}",
            sign,
            self.currency_symbol,
            whole,
            frac,
            width = usize::from(self.currency_decimals)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(4999), "$49.99");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(0), "$0.00");
        assert_eq!(config.format_currency(-1234), "-$12.34");
    }

    #[test]
    fn test_format_currency_custom_symbol_and_decimals() {
        let config = ConfigState {
            currency_symbol: "¥".to_string(),
            currency_decimals: 0,
            ..ConfigState::default()
        };
        assert_eq!(config.format_currency(4999), "¥4999");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ConfigState::default();
        config.apply_overrides(env(&[
            ("AURA_DB_PATH", "/tmp/aura.db"),
            ("AURA_STORE_NAME", "Aura Outlet"),
            ("AURA_SIMULATED_LATENCY_MS", "0"),
            ("AURA_CURRENCY_SYMBOL", "€"),
        ]));

        assert_eq!(config.database_path, Some(PathBuf::from("/tmp/aura.db")));
        assert_eq!(config.store_name, "Aura Outlet");
        assert_eq!(config.simulated_latency(), Duration::ZERO);
        assert_eq!(config.currency_symbol, "€");
    }

    #[test]
    fn test_invalid_latency_override_is_ignored() {
        let mut config = ConfigState::default();
        config.apply_overrides(env(&[("AURA_SIMULATED_LATENCY_MS", "soon")]));
        assert_eq!(config.simulated_latency_ms, 1000);
    }

    #[test]
    fn test_validation() {
        assert!(ConfigState::default().validate().is_ok());

        let config = ConfigState {
            currency_symbol: " ".to_string(),
            ..ConfigState::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = ConfigState {
            flat_shipping_cents: -1,
            ..ConfigState::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ConfigState =
            toml::from_str("store_name = \"Aura Test\"\nflat_shipping_cents = 500\n").unwrap();
        assert_eq!(config.store_name, "Aura Test");
        assert_eq!(config.flat_shipping_cents, 500);
        assert_eq!(config.simulated_latency_ms, 1000);
        assert_eq!(config.shipping_policy().flat_fee.cents(), 500);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("aura-config-{}.toml", std::process::id()));
        std::fs::write(&path, "free_shipping_threshold_cents = 5000\n").unwrap();

        let config = ConfigState::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.free_shipping_threshold_cents, 5000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!("aura-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "store_name = [").unwrap();

        let result = ConfigState::from_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_serializes_camel_case_for_frontend() {
        let json = serde_json::to_value(ConfigState::default()).unwrap();
        assert_eq!(json["storeName"], "Aura");
        assert_eq!(json["simulatedLatencyMs"], 1000);
    }
}
