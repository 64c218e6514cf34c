//! Simulated prediction engine
//!
//! Produces fixed-shape forward-looking readings from random draws. No model
//! is loaded or evaluated; the model path is only carried for display.

use crate::entropy::Entropy;
use crate::models::Prediction;
use std::time::Duration;

/// Upper bound (exclusive) for simulated traffic, requests per second
pub const MAX_TRAFFIC_RPS: f64 = 1000.0;

/// Simulated confidence range in percent
pub const MIN_CONFIDENCE: f64 = 70.0;
pub const MAX_CONFIDENCE: f64 = 100.0;

/// Trait for prediction implementations
pub trait Predictor: Send + Sync {
    /// Generate a prediction for the configured window
    fn predict(&self, entropy: &mut dyn Entropy) -> Prediction;

    /// How far ahead predictions claim to look
    fn window(&self) -> Duration;
}

/// Predictor that draws every value at random
#[derive(Debug, Clone)]
pub struct SimulatedPredictor {
    window: Duration,
    model_path: Option<String>,
}

impl SimulatedPredictor {
    pub fn new(window: Duration, model_path: Option<String>) -> Self {
        Self { window, model_path }
    }

    pub fn model_path(&self) -> Option<&str> {
        self.model_path.as_deref()
    }
}

impl Predictor for SimulatedPredictor {
    fn predict(&self, entropy: &mut dyn Entropy) -> Prediction {
        let cpu = entropy.uniform(0.0, 100.0);
        let memory = entropy.uniform(0.0, 100.0);
        let traffic = entropy.uniform(0.0, MAX_TRAFFIC_RPS);
        let confidence = entropy.uniform(MIN_CONFIDENCE, MAX_CONFIDENCE);

        tracing::trace!(
            cpu = cpu,
            memory = memory,
            traffic = traffic,
            confidence = confidence,
            "Simulated prediction drawn"
        );

        Prediction {
            cpu,
            memory,
            traffic,
            confidence,
        }
    }

    fn window(&self) -> Duration {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::{RngEntropy, SequenceEntropy};

    fn predictor() -> SimulatedPredictor {
        SimulatedPredictor::new(
            Duration::from_secs(300),
            Some("./models/anomaly-detection.h5".to_string()),
        )
    }

    #[test]
    fn test_prediction_ranges() {
        let predictor = predictor();
        let mut entropy = RngEntropy::new();

        for _ in 0..1000 {
            let prediction = predictor.predict(&mut entropy);
            assert!((0.0..100.0).contains(&prediction.cpu));
            assert!((0.0..100.0).contains(&prediction.memory));
            assert!((0.0..MAX_TRAFFIC_RPS).contains(&prediction.traffic));
            assert!((MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&prediction.confidence));
        }
    }

    #[test]
    fn test_prediction_extremes() {
        let predictor = predictor();

        let mut low = SequenceEntropy::new([0.0]);
        let prediction = predictor.predict(&mut low);
        assert_eq!(prediction.traffic, 0.0);
        assert_eq!(prediction.confidence, MIN_CONFIDENCE);

        let mut high = SequenceEntropy::new([1.0]);
        let prediction = predictor.predict(&mut high);
        assert!(prediction.traffic < MAX_TRAFFIC_RPS);
        assert!(prediction.confidence <= MAX_CONFIDENCE);
    }

    #[test]
    fn test_window_and_model_path() {
        let predictor = predictor();
        assert_eq!(predictor.window(), Duration::from_secs(300));
        assert_eq!(predictor.model_path(), Some("./models/anomaly-detection.h5"));
    }
}
