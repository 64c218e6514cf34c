//! Simulator configuration

use anyhow::Result;
use serde::Deserialize;
use simulator_lib::Preset;
use tracing::warn;

/// Process configuration read from `SIMULATOR_*` environment variables
#[derive(Debug, Clone, Default)]
pub struct SimulatorConfig {
    /// Mode selector: production, development or experimental
    pub env: Option<String>,

    /// Seed for reproducible synthetic readings
    pub seed: Option<u64>,
}

/// Values as they appear in the environment, before parsing
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    env: Option<String>,
    #[serde(default)]
    seed: Option<String>,
}

impl SimulatorConfig {
    /// Load configuration from the environment
    pub fn load() -> Result<Self> {
        Self::from_source(config::Environment::with_prefix("SIMULATOR"))
    }

    /// Load configuration from an arbitrary source.
    ///
    /// Each value falls back on its own: a malformed seed never discards the
    /// mode selector.
    pub fn from_source<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder().add_source(source).build()?;

        let raw: RawConfig = config.try_deserialize().unwrap_or_else(|e| {
            warn!(error = %e, "Invalid simulator configuration, using defaults");
            RawConfig::default()
        });

        Ok(Self {
            env: raw.env,
            seed: raw.seed.as_deref().and_then(parse_seed),
        })
    }

    /// Preset for the configured mode selector
    pub fn preset(&self) -> Preset {
        Preset::from_selector(self.env.as_deref())
    }
}

fn parse_seed(value: &str) -> Option<u64> {
    match value.parse() {
        Ok(seed) => Some(seed),
        Err(e) => {
            warn!(seed = %value, error = %e, "Invalid SIMULATOR_SEED, using OS entropy");
            None
        }
    }
}
