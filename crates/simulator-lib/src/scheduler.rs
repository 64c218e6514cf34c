//! Periodic report and retraining loops
//!
//! Both loops run as independent tasks on the same runtime. They share no
//! mutable state; each owns its own output handle and ticker, so their
//! output interleaves only at whole-callback boundaries.

use crate::observability::StructuredLogger;
use crate::preset::{Preset, RETRAIN_INTERVAL};
use crate::report::{self, Reporter, MODEL_LOADED_NOTICE, RETRAIN_NOTICE};
use std::io::Write;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::{interval, interval_at, Instant, MissedTickBehavior};
use tracing::info;

/// Health report loop: one cycle immediately, then one per preset interval
pub struct ReportLoop<W> {
    reporter: Reporter,
    out: W,
    logger: StructuredLogger,
    cycles: u64,
}

impl<W: Write + Send> ReportLoop<W> {
    pub fn new(reporter: Reporter, out: W, logger: StructuredLogger) -> Self {
        Self {
            reporter,
            out,
            logger,
            cycles: 0,
        }
    }

    /// Run until a shutdown signal is received
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        let period = self.reporter.preset().interval;
        info!(
            interval_secs = period.as_secs(),
            mode = %self.reporter.preset().mode,
            "Starting health report loop"
        );

        // First tick completes immediately; a stalled cycle shifts the
        // schedule instead of replaying missed ticks
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.run_cycle();
                }
                _ = shutdown.recv() => {
                    info!(cycles = self.cycles, "Shutting down health report loop");
                    break;
                }
            }
        }
    }

    /// Compute, render and log a single cycle
    pub fn run_cycle(&mut self) {
        let report = self.reporter.run_cycle(chrono::Utc::now());
        self.cycles += 1;

        if let Err(e) = report.render(&mut self.out) {
            self.logger.log_output_error(&e);
        }

        if self.cycles == 1 && self.reporter.preset().predictions_active() {
            if let Err(e) = report::write_notice(&mut self.out, MODEL_LOADED_NOTICE) {
                self.logger.log_output_error(&e);
            }
        }

        if let Err(e) = self.out.flush() {
            self.logger.log_output_error(&e);
        }

        self.logger.log_cycle(self.cycles, &report);
    }

    /// Number of cycles completed so far
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}

/// Prints the simulated retraining notice on a fixed period
pub struct RetrainTicker<W> {
    period: Duration,
    out: W,
    logger: StructuredLogger,
    notices: u64,
}

impl<W: Write + Send> RetrainTicker<W> {
    /// Ticker for `preset`, or `None` unless simulated predictions are active
    pub fn for_preset(preset: &Preset, out: W, logger: StructuredLogger) -> Option<Self> {
        if !preset.predictions_active() {
            return None;
        }
        Some(Self::new(RETRAIN_INTERVAL, out, logger))
    }

    pub fn new(period: Duration, out: W, logger: StructuredLogger) -> Self {
        Self {
            period,
            out,
            logger,
            notices: 0,
        }
    }

    /// Run until a shutdown signal is received. The first notice comes after
    /// one full period.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        info!(
            interval_secs = self.period.as_secs(),
            "Starting retraining ticker"
        );

        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.notify();
                }
                _ = shutdown.recv() => {
                    info!(notices = self.notices, "Shutting down retraining ticker");
                    break;
                }
            }
        }
    }

    fn notify(&mut self) {
        self.notices += 1;
        let result = report::write_notice(&mut self.out, RETRAIN_NOTICE)
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            self.logger.log_output_error(&e);
        }
        self.logger.log_retrain(self.notices);
    }
}
