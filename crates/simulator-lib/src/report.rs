//! Health report generation and rendering
//!
//! A cycle is computed into a [`CycleReport`] first and rendered afterwards,
//! so the threshold logic can be checked without parsing text.

use crate::entropy::Entropy;
use crate::models::{HealthStatus, MetricSnapshot, Prediction, ProviderStatus};
use crate::predictor::{Predictor, SimulatedPredictor};
use crate::preset::{Mode, Preset};
use crate::sampler;
use chrono::{DateTime, SecondsFormat, Utc};
use colored::Colorize;
use std::io::{self, Write};
use std::time::Duration;

/// Line printed around the banner and at the end of every cycle
pub const SEPARATOR: &str = "================================================";

/// Printed by the retraining ticker
pub const RETRAIN_NOTICE: &str = "🎓 AI Model: Retraining on new data...";

/// Printed once after the first cycle when predictions are active
pub const MODEL_LOADED_NOTICE: &str = "🎓 AI Model: Loaded successfully";

/// Everything a single cycle prints
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    pub timestamp: DateTime<Utc>,
    pub mode: Mode,
    pub providers: Vec<ProviderStatus>,
    pub snapshot: MetricSnapshot,
    pub prediction: Option<PredictionReport>,
    pub status: HealthStatus,
}

/// A prediction together with the window it claims to cover
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionReport {
    pub prediction: Prediction,
    pub window: Duration,
}

impl CycleReport {
    /// Write the report in its human-readable form
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let timestamp = self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true);
        writeln!(out)?;
        writeln!(
            out,
            "[{}] === HEALTH CHECK ({}) ===",
            timestamp,
            self.mode.label().to_uppercase()
        )?;

        for provider in &self.providers {
            writeln!(out, "☁️  {} Status:", provider.name.to_uppercase())?;
            writeln!(out, "   ✓ Instances: {}", provider.instances)?;
            writeln!(out, "   ✓ Load: {:.2}%", provider.load)?;
        }

        writeln!(out)?;
        writeln!(out, "💻 System Metrics:")?;
        writeln!(out, "   CPU: {:.2}%", self.snapshot.cpu)?;
        writeln!(out, "   Memory: {:.2}%", self.snapshot.memory)?;
        writeln!(out, "   Disk: {:.2}% used", self.snapshot.disk)?;

        if let Some(report) = &self.prediction {
            report.render(out)?;
        }

        writeln!(out)?;
        match self.status {
            HealthStatus::Warning => writeln!(
                out,
                "{}",
                "🔴 System Status: WARNING - High resource usage".red().bold()
            )?,
            HealthStatus::Optimal => {
                writeln!(out, "{}", "🟢 System Status: OPTIMAL".green().bold())?
            }
        }

        writeln!(out, "{}", SEPARATOR)
    }
}

impl PredictionReport {
    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "🤖 AI Prediction Engine: Analyzing patterns...")?;
        writeln!(
            out,
            "📊 Predicted metrics ({}s ahead):",
            self.window.as_secs()
        )?;
        writeln!(out, "   CPU: {:.2}%", self.prediction.cpu)?;
        writeln!(out, "   Memory: {:.2}%", self.prediction.memory)?;
        writeln!(out, "   Traffic: {:.0} req/s", self.prediction.traffic)?;
        writeln!(out, "   Confidence: {:.2}%", self.prediction.confidence)
    }
}

/// Write the one-time startup banner
pub fn write_banner<W: Write>(out: &mut W, preset: &Preset) -> io::Result<()> {
    let title = if preset.mode == Mode::Exploratory {
        "DevOps Simulator - AI Monitor v3.0"
    } else {
        "DevOps Simulator - Monitor"
    };
    let debug = if preset.debug {
        "ENABLED".yellow().to_string()
    } else {
        "DISABLED".to_string()
    };

    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "{}", title.bold())?;
    writeln!(out, "Environment: {}", preset.mode.label())?;
    writeln!(out, "Debug Mode: {}", debug)?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Monitoring every {}ms", preset.interval.as_millis())?;
    writeln!(out)
}

/// Write a bare notice line preceded by a blank line
pub fn write_notice<W: Write>(out: &mut W, notice: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", notice)
}

/// Produces one [`CycleReport`] per call from the active preset
pub struct Reporter {
    preset: Preset,
    entropy: Box<dyn Entropy>,
    predictor: Option<Box<dyn Predictor>>,
}

impl Reporter {
    /// Create a reporter, attaching a simulated predictor when the preset
    /// enables predictions
    pub fn new(preset: Preset, entropy: Box<dyn Entropy>) -> Self {
        let predictor: Option<Box<dyn Predictor>> = if preset.predictions_active() {
            Some(Box::new(SimulatedPredictor::new(
                preset.prediction_window.unwrap_or_default(),
                preset.model_path.clone(),
            )))
        } else {
            None
        };

        Self {
            preset,
            entropy,
            predictor,
        }
    }

    pub fn preset(&self) -> &Preset {
        &self.preset
    }

    /// Run one health check cycle at `now`
    pub fn run_cycle(&mut self, now: DateTime<Utc>) -> CycleReport {
        let providers = if self.preset.mode == Mode::Exploratory {
            sampler::sample_providers(&self.preset.cloud_providers, self.entropy.as_mut())
        } else {
            Vec::new()
        };

        let snapshot = sampler::sample_metrics(self.entropy.as_mut());

        let prediction = match (&self.predictor, self.preset.predictions_active()) {
            (Some(predictor), true) => Some(PredictionReport {
                prediction: predictor.predict(self.entropy.as_mut()),
                window: predictor.window(),
            }),
            _ => None,
        };

        let status = HealthStatus::evaluate(&snapshot, self.preset.alert_threshold);

        CycleReport {
            timestamp: now,
            mode: self.preset.mode,
            providers,
            snapshot,
            prediction,
            status,
        }
    }
}
