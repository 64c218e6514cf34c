//! DevOps Simulator - periodic synthetic health reports
//!
//! Prints a health report on a mode-dependent interval. Every reading is
//! randomly generated; nothing is collected from the host.

use anyhow::{Context, Result};
use simulator_lib::{
    report::{self, Reporter},
    scheduler::{ReportLoop, RetrainTicker},
    Entropy, RngEntropy, StructuredLogger,
};
use tokio::sync::broadcast;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

const SIMULATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // JSON logs on stderr, the report owns stdout
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = config::SimulatorConfig::load()?;
    let preset = config.preset();
    info!(mode = %preset.mode, seeded = config.seed.is_some(), "Simulator configured");

    let logger = StructuredLogger::new(&preset);
    logger.log_startup(SIMULATOR_VERSION, &preset);

    let mut stdout = std::io::stdout();
    report::write_banner(&mut stdout, &preset).context("Failed to write startup banner")?;

    let (shutdown_tx, _) = broadcast::channel::<()>(1);

    let reporter = Reporter::new(preset.clone(), entropy(config.seed));
    let report_loop = ReportLoop::new(reporter, std::io::stdout(), logger.clone());
    let report_handle = tokio::spawn(report_loop.run(shutdown_tx.subscribe()));

    let retrain_handle = RetrainTicker::for_preset(&preset, std::io::stdout(), logger.clone())
        .map(|ticker| tokio::spawn(ticker.run(shutdown_tx.subscribe())));

    // Runs until externally terminated
    tokio::signal::ctrl_c().await?;
    logger.log_shutdown("SIGINT received");

    let _ = shutdown_tx.send(());
    report_handle.await?;
    if let Some(handle) = retrain_handle {
        handle.await?;
    }

    Ok(())
}

fn entropy(seed: Option<u64>) -> Box<dyn Entropy> {
    match seed {
        Some(seed) => Box::new(RngEntropy::seeded(seed)),
        None => Box::new(RngEntropy::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simulator_lib::{Mode, Preset};

    #[test]
    fn test_seeded_entropy_is_deterministic() {
        let mut a = entropy(Some(5));
        let mut b = entropy(Some(5));
        assert_eq!(a.uniform(0.0, 100.0), b.uniform(0.0, 100.0));
    }

    #[test]
    fn test_unseeded_entropy_in_range() {
        let mut e = entropy(None);
        let value = e.uniform(0.0, 100.0);
        assert!((0.0..100.0).contains(&value));
    }

    #[test]
    fn test_preset_passed_to_reporter() {
        let preset = Preset::for_mode(Mode::Relaxed);
        let reporter = Reporter::new(preset.clone(), entropy(Some(1)));
        assert_eq!(reporter.preset(), &preset);
    }
}
