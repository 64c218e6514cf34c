//! Core data models for the simulator

use std::fmt;

/// Synthetic resource usage for a single cycle, all values in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSnapshot {
    pub cpu: f64,
    pub memory: f64,
    pub disk: f64,
}

impl MetricSnapshot {
    /// Highest of the three readings
    pub fn max_usage(&self) -> f64 {
        self.cpu.max(self.memory).max(self.disk)
    }
}

/// Simulated status of one cloud provider
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderStatus {
    pub name: String,
    pub instances: u32,
    pub load: f64,
}

/// Simulated forward-looking readings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub cpu: f64,
    pub memory: f64,
    /// Requests per second
    pub traffic: f64,
    /// Percent, between 70 and 100
    pub confidence: f64,
}

/// Outcome of comparing a snapshot against the alert threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Optimal,
    Warning,
}

impl HealthStatus {
    /// Warning when the highest reading is strictly above `threshold`
    pub fn evaluate(snapshot: &MetricSnapshot, threshold: f64) -> Self {
        if snapshot.max_usage() > threshold {
            HealthStatus::Warning
        } else {
            HealthStatus::Optimal
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Optimal => write!(f, "optimal"),
            HealthStatus::Warning => write!(f, "warning"),
        }
    }
}
