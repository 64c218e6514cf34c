//! Structured logging for simulator events
//!
//! The human-readable report goes to stdout. These records go through
//! `tracing`, which the binary routes to stderr as JSON.

use crate::models::HealthStatus;
use crate::preset::Preset;
use crate::report::CycleReport;
use tracing::{debug, info, warn};

/// Structured logger for simulator events
///
/// Provides consistent, event-tagged records for startup, health checks,
/// retraining notices and shutdown.
#[derive(Clone)]
pub struct StructuredLogger {
    mode: &'static str,
}

impl StructuredLogger {
    pub fn new(preset: &Preset) -> Self {
        Self {
            mode: preset.mode.label(),
        }
    }

    /// Log simulator startup
    pub fn log_startup(&self, version: &str, preset: &Preset) {
        info!(
            event = "simulator_started",
            mode = %self.mode,
            version = %version,
            interval_ms = preset.interval.as_millis() as u64,
            alert_threshold = preset.alert_threshold,
            debug = preset.debug,
            ai_enabled = preset.ai_enabled,
            "DevOps simulator started"
        );

        if preset.verbose_logging {
            debug!(
                event = "preset_loaded",
                mode = %self.mode,
                providers = ?preset.cloud_providers,
                metrics_endpoint = ?preset.metrics_endpoint,
                model_path = ?preset.model_path,
                "Verbose logging enabled"
            );
        }
    }

    /// Log a completed health check
    pub fn log_cycle(&self, cycle: u64, report: &CycleReport) {
        match report.status {
            HealthStatus::Warning => {
                warn!(
                    event = "health_check",
                    mode = %self.mode,
                    cycle = cycle,
                    status = %report.status,
                    max_usage = report.snapshot.max_usage(),
                    "Simulated resource usage above threshold"
                );
            }
            HealthStatus::Optimal => {
                debug!(
                    event = "health_check",
                    mode = %self.mode,
                    cycle = cycle,
                    status = %report.status,
                    max_usage = report.snapshot.max_usage(),
                    "Health check complete"
                );
            }
        }
    }

    /// Log a simulated retraining notice
    pub fn log_retrain(&self, count: u64) {
        info!(
            event = "model_retraining",
            mode = %self.mode,
            count = count,
            "Simulated model retraining"
        );
    }

    /// Log a failed write to the report output
    pub fn log_output_error(&self, error: &std::io::Error) {
        warn!(
            event = "output_error",
            mode = %self.mode,
            error = %error,
            "Failed to write report output"
        );
    }

    /// Log simulator shutdown
    pub fn log_shutdown(&self, reason: &str) {
        info!(
            event = "simulator_shutdown",
            mode = %self.mode,
            reason = %reason,
            "DevOps simulator shutting down"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::SequenceEntropy;
    use crate::preset::Mode;
    use crate::report::Reporter;
    use crate::tests::SharedBuffer;

    #[test]
    fn test_structured_logger_creation() {
        let logger = StructuredLogger::new(&Preset::for_mode(Mode::Exploratory));
        assert_eq!(logger.mode, "experimental");
    }

    /// Run `f` with a plain-text subscriber and return what it recorded
    fn capture(f: impl FnOnce()) -> String {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        buffer.contents()
    }

    #[test]
    fn test_lifecycle_events_recorded() {
        let preset = Preset::for_mode(Mode::Relaxed);
        let logger = StructuredLogger::new(&preset);

        let output = capture(|| {
            logger.log_startup("0.1.0", &preset);
            logger.log_retrain(3);
            logger.log_shutdown("SIGINT received");
        });

        assert!(output.contains("simulator_started"));
        assert!(output.contains("mode=development"));
        assert!(output.contains("interval_ms=5000"));
        // Relaxed preset enables verbose logging
        assert!(output.contains("preset_loaded"));
        assert!(output.contains("model_retraining"));
        assert!(output.contains("count=3"));
        assert!(output.contains("simulator_shutdown"));
        assert!(output.contains("SIGINT received"));
    }

    #[test]
    fn test_preset_details_only_when_verbose() {
        let preset = Preset::for_mode(Mode::Standard);
        let logger = StructuredLogger::new(&preset);

        let output = capture(|| logger.log_startup("0.1.0", &preset));

        assert!(output.contains("simulator_started"));
        assert!(!output.contains("preset_loaded"));
    }

    #[test]
    fn test_cycle_level_follows_status() {
        let preset = Preset::for_mode(Mode::Standard);
        let logger = StructuredLogger::new(&preset);
        let mut warning = Reporter::new(preset.clone(), Box::new(SequenceEntropy::new([0.95, 0.1, 0.1])));
        let mut optimal = Reporter::new(preset, Box::new(SequenceEntropy::new([0.5])));
        let warning_report = warning.run_cycle(chrono::Utc::now());
        let optimal_report = optimal.run_cycle(chrono::Utc::now());

        let output = capture(|| logger.log_cycle(1, &warning_report));
        assert!(output.contains("WARN"));
        assert!(output.contains("status=warning"));

        let output = capture(|| logger.log_cycle(2, &optimal_report));
        assert!(output.contains("DEBUG"));
        assert!(output.contains("status=optimal"));
        assert!(!output.contains("WARN"));
    }
}
