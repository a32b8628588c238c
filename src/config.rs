//! Suggestion configuration.

use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How a [`Speller`](crate::Speller) scores and filters candidates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Similarity algorithm
    pub algorithm: Algorithm,
    /// Minimum likelihood a correction must strictly exceed
    pub threshold: Option<f64>,
    /// Fan candidate scoring out across the rayon pool
    pub parallel: bool,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Jaro,
            threshold: None,
            parallel: false,
        }
    }
}

impl SuggestConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check that the threshold, if any, is a finite value in [0.0, 1.0].
    pub fn validate(&self) -> Result<()> {
        if let Some(threshold) = self.threshold {
            if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
                warn!(threshold, "rejecting suggestion threshold");
                return Err(Error::InvalidThreshold(threshold));
            }
        }
        Ok(())
    }
}
