//! Reporting modes and their static presets
//!
//! A mode is picked once at startup from an environment-style selector and
//! maps to a fixed bundle of reporting parameters. Presets are never mutated
//! after construction.

use std::fmt;
use std::time::Duration;

/// Interval between simulated model retraining notices
pub const RETRAIN_INTERVAL: Duration = Duration::from_secs(120);

/// Behavioral mode selected at process start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Slow cadence, conservative threshold
    #[default]
    Standard,
    /// Fast cadence with debug output
    Relaxed,
    /// Simulated multi-cloud and prediction output
    Exploratory,
}

impl Mode {
    /// Resolve a selector string into a mode.
    ///
    /// Matching is exact. Unknown, padded or missing selectors resolve to
    /// [`Mode::Standard`]; this never fails.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            Some("production") => Mode::Standard,
            Some("development") => Mode::Relaxed,
            Some("experimental") => Mode::Exploratory,
            Some(other) => {
                tracing::debug!(selector = %other, "Unrecognized mode selector, using standard preset");
                Mode::Standard
            }
            None => Mode::Standard,
        }
    }

    /// Selector label this mode is known by in the environment
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Standard => "production",
            Mode::Relaxed => "development",
            Mode::Exploratory => "experimental",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed reporting parameters for a [`Mode`]
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub mode: Mode,
    /// Time between health report cycles
    pub interval: Duration,
    /// Percentage above which the cycle reports a warning
    pub alert_threshold: f64,
    pub debug: bool,
    pub verbose_logging: bool,
    /// Enables simulated predictions and the retraining ticker
    pub ai_enabled: bool,
    /// Carried for display only, never contacted
    pub metrics_endpoint: Option<String>,
    /// Carried for display only, never loaded
    pub model_path: Option<String>,
    /// Simulated cloud providers, reported in this order
    pub cloud_providers: Vec<String>,
    /// How far ahead simulated predictions claim to look
    pub prediction_window: Option<Duration>,
}

impl Preset {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Standard => Self {
                mode,
                interval: Duration::from_secs(60),
                alert_threshold: 80.0,
                debug: false,
                verbose_logging: false,
                ai_enabled: false,
                metrics_endpoint: None,
                model_path: None,
                cloud_providers: Vec::new(),
                prediction_window: None,
            },
            Mode::Relaxed => Self {
                mode,
                interval: Duration::from_secs(5),
                alert_threshold: 90.0,
                debug: true,
                verbose_logging: true,
                ai_enabled: false,
                metrics_endpoint: None,
                model_path: None,
                cloud_providers: Vec::new(),
                prediction_window: None,
            },
            Mode::Exploratory => Self {
                mode,
                interval: Duration::from_secs(30),
                alert_threshold: 75.0,
                debug: true,
                verbose_logging: false,
                ai_enabled: true,
                metrics_endpoint: Some("http://localhost:9000/metrics".to_string()),
                model_path: Some("./models/anomaly-detection.h5".to_string()),
                cloud_providers: ["aws", "azure", "gcp"].map(String::from).to_vec(),
                prediction_window: Some(Duration::from_secs(300)),
            },
        }
    }

    /// Preset for a raw selector, falling back to standard
    pub fn from_selector(selector: Option<&str>) -> Self {
        Self::for_mode(Mode::from_selector(selector))
    }

    /// Whether simulated predictions and retraining notices are produced
    pub fn predictions_active(&self) -> bool {
        self.mode == Mode::Exploratory && self.ai_enabled
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::for_mode(Mode::default())
    }
}
