//! Synthetic readings for the health report
//!
//! Nothing here touches the host. Each call draws fresh values from the
//! supplied [`Entropy`].

use crate::entropy::Entropy;
use crate::models::{MetricSnapshot, ProviderStatus};

/// Upper bound (exclusive) for any usage percentage
pub const MAX_USAGE_PERCENT: f64 = 100.0;

/// Simulated instance count range per provider, upper bound exclusive
pub const MIN_INSTANCES: u32 = 5;
pub const MAX_INSTANCES: u32 = 15;

/// Draw CPU, memory and disk usage, in that order
pub fn sample_metrics(entropy: &mut dyn Entropy) -> MetricSnapshot {
    let cpu = entropy.uniform(0.0, MAX_USAGE_PERCENT);
    let memory = entropy.uniform(0.0, MAX_USAGE_PERCENT);
    let disk = entropy.uniform(0.0, MAX_USAGE_PERCENT);
    MetricSnapshot { cpu, memory, disk }
}

/// Draw a status block for one provider
pub fn sample_provider(name: &str, entropy: &mut dyn Entropy) -> ProviderStatus {
    let instances = entropy.uniform_int(MIN_INSTANCES, MAX_INSTANCES);
    let load = entropy.uniform(0.0, MAX_USAGE_PERCENT);
    ProviderStatus {
        name: name.to_string(),
        instances,
        load,
    }
}

/// One status block per provider, preserving the configured order
pub fn sample_providers(names: &[String], entropy: &mut dyn Entropy) -> Vec<ProviderStatus> {
    names
        .iter()
        .map(|name| sample_provider(name, &mut *entropy))
        .collect()
}
