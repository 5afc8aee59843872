//! End-to-end collection run tests with scripted venues and an
//! in-memory store.

use pulse_aggregator::Aggregator;
use pulse_collector::config::RoutingConfig;
use pulse_collector::{CollectorJob, RoutingTable};
use pulse_core::{OrderBookTop, Price, Token, Venue};
use pulse_store::{DynQuoteStore, MemoryStore};
use pulse_venues::MockBookSource;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::Arc;

fn token(s: &str) -> Token {
    Token::new(s).unwrap()
}

fn top(bid: rust_decimal::Decimal, ask: rust_decimal::Decimal) -> OrderBookTop {
    OrderBookTop::new(Price::new(bid), Price::new(ask))
}

fn routing() -> RoutingTable {
    RoutingTable::new(&RoutingConfig {
        default: "price_history".to_string(),
        overrides: HashMap::from([("BTC".to_string(), "btc_price_history".to_string())]),
    })
}

struct Fixture {
    lighter: Arc<MockBookSource>,
    paradex: Arc<MockBookSource>,
    store: Arc<MemoryStore>,
    job: CollectorJob,
}

fn fixture(tokens: &[&str]) -> Fixture {
    let lighter = Arc::new(MockBookSource::new(Venue::Lighter));
    let paradex = Arc::new(MockBookSource::new(Venue::Paradex));
    let store = Arc::new(MemoryStore::new());

    let aggregator = Aggregator::new(vec![lighter.clone(), paradex.clone()]);
    let job = CollectorJob::new(
        aggregator,
        store.clone() as DynQuoteStore,
        routing(),
        tokens.iter().map(|s| s.to_string()).collect(),
    );

    Fixture {
        lighter,
        paradex,
        store,
        job,
    }
}

#[tokio::test]
async fn test_run_routes_btc_to_dedicated_destination() {
    let f = fixture(&["BTC", "ETH"]);
    f.lighter.set_top(token("BTC"), top(dec!(50000), dec!(50010)));
    f.paradex.set_top(token("BTC"), top(dec!(50005), dec!(50015)));
    f.lighter.set_unmapped(token("ETH"));
    f.paradex.set_top(token("ETH"), top(dec!(3000), dec!(3002)));

    let report = f.job.run_once().await;

    assert!(report.success);
    assert_eq!(report.status_code(), 200);
    assert_eq!(report.inserted, 3);

    let btc_rows = f.store.rows("btc_price_history");
    assert_eq!(btc_rows.len(), 2);
    let mids: Vec<_> = btc_rows.iter().map(|r| r.mid.inner()).collect();
    assert!(mids.contains(&dec!(50005)));
    assert!(mids.contains(&dec!(50010)));

    let default_rows = f.store.rows("price_history");
    assert_eq!(default_rows.len(), 1);
    assert_eq!(default_rows[0].token, "ETH");
    assert_eq!(default_rows[0].mid.inner(), dec!(3001));
}

#[tokio::test]
async fn test_both_venue_rows_share_one_timestamp() {
    let f = fixture(&["BTC"]);
    f.lighter.set_top(token("BTC"), top(dec!(50000), dec!(50010)));
    f.paradex.set_top(token("BTC"), top(dec!(50005), dec!(50015)));

    f.job.run_once().await;

    let rows = f.store.rows("btc_price_history");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].timestamp, rows[1].timestamp);
    // Same token from two venues, distinguished by the exchange column
    let exchanges: Vec<_> = rows.iter().map(|r| r.exchange.as_str()).collect();
    assert!(exchanges.contains(&"lighter"));
    assert!(exchanges.contains(&"paradex"));
}

#[tokio::test]
async fn test_empty_collection_is_success() {
    let f = fixture(&["BTC"]);
    f.lighter.set_network_error(token("BTC"), "HTTP 503");
    f.paradex.set_unmapped(token("BTC"));

    let report = f.job.run_once().await;

    assert!(report.success);
    assert_eq!(report.inserted, 0);
    assert_eq!(f.store.total_rows(), 0);
}

#[tokio::test]
async fn test_partial_destination_failure_not_fatal() {
    let f = fixture(&["BTC", "ETH"]);
    f.lighter.set_top(token("BTC"), top(dec!(50000), dec!(50010)));
    f.lighter.set_top(token("ETH"), top(dec!(3000), dec!(3002)));
    f.paradex.set_unmapped(token("BTC"));
    f.paradex.set_unmapped(token("ETH"));
    f.store.fail_destination("btc_price_history");

    let report = f.job.run_once().await;

    // One destination survived, so the run is not fatal
    assert!(report.success);
    assert_eq!(report.inserted, 1);
    assert!(report.message.contains("1 of 2 destinations failed"));
    assert_eq!(f.store.rows("price_history").len(), 1);
    assert!(f.store.rows("btc_price_history").is_empty());
}

#[tokio::test]
async fn test_all_destinations_failing_is_fatal() {
    let f = fixture(&["BTC", "ETH"]);
    f.lighter.set_top(token("BTC"), top(dec!(50000), dec!(50010)));
    f.lighter.set_top(token("ETH"), top(dec!(3000), dec!(3002)));
    f.paradex.set_unmapped(token("BTC"));
    f.paradex.set_unmapped(token("ETH"));
    f.store.fail_destination("btc_price_history");
    f.store.fail_destination("price_history");

    let report = f.job.run_once().await;

    assert!(!report.success);
    assert_eq!(report.status_code(), 500);
    assert_eq!(report.inserted, 0);
    assert_eq!(f.store.total_rows(), 0);
}

#[tokio::test]
async fn test_second_run_appends_rows() {
    let f = fixture(&["ETH"]);
    f.lighter.set_top(token("ETH"), top(dec!(3000), dec!(3002)));
    f.paradex.set_unmapped(token("ETH"));

    f.job.run_once().await;
    f.job.run_once().await;

    // No dedup across runs: identical quotes accumulate
    assert_eq!(f.store.rows("price_history").len(), 2);
}

#[tokio::test]
async fn test_token_with_both_venues_failing_does_not_abort_run() {
    let f = fixture(&["BTC", "ETH"]);
    f.lighter.set_network_error(token("BTC"), "HTTP 503");
    f.paradex.set_malformed(token("BTC"), "empty ask side");
    f.lighter.set_top(token("ETH"), top(dec!(3000), dec!(3002)));
    f.paradex.set_unmapped(token("ETH"));

    let report = f.job.run_once().await;

    assert!(report.success);
    assert_eq!(report.inserted, 1);
    assert!(f.store.rows("btc_price_history").is_empty());
    assert_eq!(f.store.rows("price_history").len(), 1);
}

#[tokio::test]
async fn test_rejected_token_is_skipped_and_run_continues() {
    let f = fixture(&["  ", "BTC"]);
    f.lighter.set_top(token("BTC"), top(dec!(50000), dec!(50010)));
    f.paradex.set_unmapped(token("BTC"));

    let report = f.job.run_once().await;

    // The blank symbol is skipped; the rest of the run proceeds
    assert!(report.success);
    assert_eq!(report.inserted, 1);
    assert_eq!(f.store.rows("btc_price_history").len(), 1);
    assert_eq!(f.lighter.fetched(), vec![token("BTC")]);
}
