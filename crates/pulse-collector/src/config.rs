//! Application configuration.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Lighter venue configuration.
///
/// Lighter keys markets by numeric id, so every token that should be
/// fetched from it needs an explicit entry; tokens without one are
/// silently omitted for this venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LighterConfig {
    /// API base URL.
    #[serde(default = "default_lighter_base_url")]
    pub base_url: String,
    /// Token to numeric market id mapping.
    #[serde(default = "default_lighter_markets")]
    pub markets: HashMap<String, u32>,
}

fn default_lighter_base_url() -> String {
    "https://mainnet.zklighter.elliot.ai".to_string()
}

fn default_lighter_markets() -> HashMap<String, u32> {
    HashMap::from([
        ("BTC".to_string(), 1),
        ("ETH".to_string(), 0),
        ("SOL".to_string(), 2),
        ("BNB".to_string(), 25),
    ])
}

impl Default for LighterConfig {
    fn default() -> Self {
        Self {
            base_url: default_lighter_base_url(),
            markets: default_lighter_markets(),
        }
    }
}

/// Paradex venue configuration.
///
/// Paradex instrument symbols default to `{TOKEN}-USD-PERP`; `symbols`
/// overrides that derivation for tokens whose listing differs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParadexConfig {
    /// API base URL.
    #[serde(default = "default_paradex_base_url")]
    pub base_url: String,
    /// Token to instrument symbol overrides.
    #[serde(default)]
    pub symbols: HashMap<String, String>,
}

fn default_paradex_base_url() -> String {
    "https://api.prod.paradex.trade".to_string()
}

impl Default for ParadexConfig {
    fn default() -> Self {
        Self {
            base_url: default_paradex_base_url(),
            symbols: HashMap::new(),
        }
    }
}

impl ParadexConfig {
    /// Instrument symbol for a token, derived unless overridden.
    pub fn symbol_for(&self, token: &str) -> String {
        self.symbols
            .get(token)
            .cloned()
            .unwrap_or_else(|| format!("{token}-USD-PERP"))
    }
}

/// Routing configuration: which destination each token's rows go to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Destination for tokens without an override.
    #[serde(default = "default_routing_destination")]
    pub default: String,
    /// Per-token destination overrides.
    #[serde(default = "default_routing_overrides")]
    pub overrides: HashMap<String, String>,
}

fn default_routing_destination() -> String {
    "price_history".to_string()
}

fn default_routing_overrides() -> HashMap<String, String> {
    HashMap::from([("BTC".to_string(), "btc_price_history".to_string())])
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            default: default_routing_destination(),
            overrides: default_routing_overrides(),
        }
    }
}

/// Storage backend selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StoreConfig {
    /// PostgREST-style table endpoint.
    Rest { base_url: String },
    /// Local JSON Lines files.
    Jsonl {
        #[serde(default = "default_data_dir")]
        data_dir: String,
    },
}

fn default_data_dir() -> String {
    "./data/quotes".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::Jsonl {
            data_dir: default_data_dir(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Tokens to collect each run.
    #[serde(default = "default_tokens")]
    pub tokens: Vec<String>,
    /// Seconds between collection runs.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Lighter venue configuration.
    #[serde(default)]
    pub lighter: LighterConfig,
    /// Paradex venue configuration.
    #[serde(default)]
    pub paradex: ParadexConfig,
    /// Row routing configuration.
    #[serde(default)]
    pub routing: RoutingConfig,
    /// Storage backend configuration.
    #[serde(default)]
    pub store: StoreConfig,
}

fn default_tokens() -> Vec<String> {
    vec!["BTC".to_string(), "ETH".to_string()]
}

fn default_interval_secs() -> u64 {
    60
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            tokens: default_tokens(),
            interval_secs: default_interval_secs(),
            lighter: LighterConfig::default(),
            paradex: ParadexConfig::default(),
            routing: RoutingConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl CollectorConfig {
    /// Load configuration from file.
    pub fn load() -> AppResult<Self> {
        let config_path =
            std::env::var("PULSE_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());

        if Path::new(&config_path).exists() {
            Self::from_file(&config_path)
        } else {
            tracing::warn!(path = %config_path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the collector cannot run with.
    pub fn validate(&self) -> AppResult<()> {
        if self.tokens.is_empty() {
            return Err(AppError::Config("tokens must not be empty".to_string()));
        }
        if self.interval_secs == 0 {
            return Err(AppError::Config(
                "interval_secs must be positive".to_string(),
            ));
        }
        if self.routing.default.trim().is_empty() {
            return Err(AppError::Config(
                "routing.default must not be blank".to_string(),
            ));
        }
        if self.routing.overrides.values().any(|d| d.trim().is_empty()) {
            return Err(AppError::Config(
                "routing.overrides must not map to blank destinations".to_string(),
            ));
        }
        Ok(())
    }
}
