//! Token-based routing of rows to storage destinations.

use crate::config::RoutingConfig;
use pulse_store::QuoteRow;
use std::collections::HashMap;

/// Maps each token to exactly one destination table.
///
/// Every row routes somewhere: tokens without an override go to the
/// default destination, so a partition of a batch is always disjoint and
/// covers the whole batch.
#[derive(Debug, Clone)]
pub struct RoutingTable {
    default: String,
    overrides: HashMap<String, String>,
}

impl RoutingTable {
    pub fn new(config: &RoutingConfig) -> Self {
        Self {
            default: config.default.clone(),
            overrides: config.overrides.clone(),
        }
    }

    /// Destination for one token.
    pub fn destination_for(&self, token: &str) -> &str {
        self.overrides
            .get(token)
            .map(String::as_str)
            .unwrap_or(&self.default)
    }

    /// Split a batch into per-destination sub-batches.
    pub fn partition(&self, rows: Vec<QuoteRow>) -> HashMap<String, Vec<QuoteRow>> {
        let mut partitions: HashMap<String, Vec<QuoteRow>> = HashMap::new();
        for row in rows {
            let destination = self.destination_for(&row.token).to_string();
            partitions.entry(destination).or_default().push(row);
        }
        partitions
    }
}
