//! Descriptive statistics over death intervals
//!
//! All figures are population statistics (divide by n), matching how the
//! tilt index is defined.

use serde::{Deserialize, Serialize};

/// Summary of a set of interval samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalStats {
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
    pub stddev: f64,
    pub min: f64,
    pub max: f64,
}

impl IntervalStats {
    /// Compute statistics for a sample set, `None` when it is empty
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            count: samples.len(),
            mean,
            variance,
            stddev: variance.sqrt(),
            min,
            max,
        })
    }
}

/// Gaps between consecutive timestamps, in collection order
pub fn consecutive_intervals(timestamps: &[u64]) -> Vec<f64> {
    timestamps
        .windows(2)
        .map(|pair| pair[1] as f64 - pair[0] as f64)
        .collect()
}
