//! Main application orchestration.
//!
//! Builds venue sources, the aggregator, the routing table, and the
//! storage backend from configuration, then drives collection runs on a
//! fixed interval.

use crate::config::{CollectorConfig, StoreConfig};
use crate::error::{AppError, AppResult};
use crate::job::{CollectorJob, RunReport};
use crate::routing::RoutingTable;
use pulse_aggregator::Aggregator;
use pulse_core::Token;
use pulse_store::{DynQuoteStore, JsonlStore, RestStore};
use pulse_venues::{DynBookSource, LighterSource, ParadexSource};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Main application.
pub struct Application {
    config: CollectorConfig,
    job: CollectorJob,
}

impl Application {
    /// Create a new application from validated configuration.
    pub fn new(config: CollectorConfig) -> AppResult<Self> {
        config.validate()?;

        let lighter = LighterSource::new(&config.lighter.base_url, lighter_markets(&config)?)?;
        let paradex = ParadexSource::new(&config.paradex.base_url, paradex_markets(&config)?)?;
        let sources: Vec<DynBookSource> = vec![Arc::new(lighter), Arc::new(paradex)];

        let store: DynQuoteStore = match &config.store {
            StoreConfig::Rest { base_url } => Arc::new(RestStore::new(base_url)?),
            StoreConfig::Jsonl { data_dir } => Arc::new(JsonlStore::new(data_dir)?),
        };

        let job = CollectorJob::new(
            Aggregator::new(sources),
            store,
            RoutingTable::new(&config.routing),
            config.tokens.clone(),
        );

        Ok(Self { config, job })
    }

    /// Run a single collection pass.
    pub async fn run_once(&self) -> RunReport {
        self.job.run_once().await
    }

    /// Run collection passes until the process is stopped.
    pub async fn run(&self) -> AppResult<()> {
        info!(
            interval_secs = self.config.interval_secs,
            tokens = ?self.config.tokens,
            "Starting collection loop"
        );

        let mut interval = tokio::time::interval(Duration::from_secs(self.config.interval_secs));
        loop {
            interval.tick().await;
            let report = self.job.run_once().await;
            if report.success {
                info!(inserted = report.inserted, message = %report.message, "Run succeeded");
            } else {
                // Keep the loop alive: the next tick may recover
                error!(message = %report.message, "Run failed");
            }
        }
    }
}

fn lighter_markets(config: &CollectorConfig) -> AppResult<HashMap<Token, u32>> {
    config
        .lighter
        .markets
        .iter()
        .map(|(symbol, &id)| {
            let token = Token::new(symbol)
                .map_err(|e| AppError::Config(format!("lighter.markets: {e}")))?;
            Ok((token, id))
        })
        .collect()
}

fn paradex_markets(config: &CollectorConfig) -> AppResult<HashMap<Token, String>> {
    let mut markets = HashMap::new();
    // Every collected token gets a derived symbol
    for symbol in &config.tokens {
        let token = Token::new(symbol).map_err(|e| AppError::Config(format!("tokens: {e}")))?;
        let instrument = config.paradex.symbol_for(token.as_str());
        markets.insert(token, instrument);
    }
    // Explicit overrides may also map tokens outside the collection set
    for (symbol, instrument) in &config.paradex.symbols {
        let token = Token::new(symbol)
            .map_err(|e| AppError::Config(format!("paradex.symbols: {e}")))?;
        markets.insert(token, instrument.clone());
    }
    Ok(markets)
}
