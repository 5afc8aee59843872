//! Periodic top-of-book quote collector - entry point.

use anyhow::Result;
use clap::Parser;
use pulse_collector::{Application, CollectorConfig};
use tracing::info;

/// Periodic top-of-book quote collector
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via PULSE_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    /// Run a single collection pass, print the report, and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    pulse_telemetry::init_logging()?;

    info!("Starting pulse collector v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => {
            info!(config_path = %path, "Loading configuration");
            CollectorConfig::from_file(path)?
        }
        None => CollectorConfig::load()?,
    };

    let app = Application::new(config)?;

    if args.once {
        let report = app.run_once().await;
        println!("{}", serde_json::to_string(&report)?);
        if !report.success {
            anyhow::bail!("{}", report.message);
        }
        return Ok(());
    }

    app.run().await?;
    Ok(())
}
