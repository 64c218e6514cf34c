//! Simulation library for the DevOps monitor demo
//!
//! This crate provides the core functionality for:
//! - Mode selection and static reporting presets
//! - Synthetic metric, cloud provider and prediction sampling
//! - Health report rendering
//! - The periodic report and retraining loops
//! - Structured logging helpers
//!
//! Every reading produced here is simulated. Nothing is collected from the
//! host and no model is ever evaluated.

pub mod entropy;
pub mod models;
pub mod observability;
pub mod predictor;
pub mod preset;
pub mod report;
pub mod sampler;
pub mod scheduler;


pub use entropy::{Entropy, RngEntropy, SequenceEntropy};
pub use models::*;
pub use observability::StructuredLogger;
pub use preset::{Mode, Preset};
