//! Analyzer configuration
//!
//! The defaults reproduce the scoring used by the dashboard: the dragon pit
//! as the objective, a 2000-unit proximity radius, a 20-sample position
//! trace and at least three deaths before a tilt index is computed.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::timeline::Position;

/// Upper bound of the position trace length; `max_positions` may only lower it
pub const MAX_TRACE_POSITIONS: usize = 20;

/// Configuration for timeline analysis
///
/// # Example
/// ```
/// use riftlens::config::AnalyzerConfig;
///
/// let config = AnalyzerConfig::default();
/// assert_eq!(config.objective_radius, 2000.0);
/// assert_eq!(config.max_positions, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// X coordinate of the objective used for the macro score
    pub objective_x: f64,

    /// Y coordinate of the objective used for the macro score
    pub objective_y: f64,

    /// Positions strictly closer than this many map units count as
    /// "near objective"
    pub objective_radius: f64,

    /// Length cap of the position trace returned for visualization
    pub max_positions: usize,

    /// Minimum number of recorded deaths before the tilt index is computed.
    /// Below this the tilt index is 0.
    pub min_deaths_for_tilt: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            objective_x: 9800.0, // dragon pit
            objective_y: 4400.0,
            objective_radius: 2000.0,
            max_positions: MAX_TRACE_POSITIONS,
            min_deaths_for_tilt: 3,
        }
    }
}

impl AnalyzerConfig {
    /// Reference point for the macro score
    pub fn objective(&self) -> Position {
        Position::new(self.objective_x, self.objective_y)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.objective_x.is_finite() || !self.objective_y.is_finite() {
            return Err(format!(
                "objective coordinates must be finite, got ({}, {})",
                self.objective_x, self.objective_y
            ));
        }

        if !(self.objective_radius.is_finite() && self.objective_radius > 0.0) {
            return Err(format!(
                "objective_radius must be positive, got {}",
                self.objective_radius
            ));
        }

        if !(1..=MAX_TRACE_POSITIONS).contains(&self.max_positions) {
            return Err(format!(
                "max_positions must be between 1 and {}, got {}",
                MAX_TRACE_POSITIONS, self.max_positions
            ));
        }

        // Two deaths give a single interval, whose spread is always zero
        if self.min_deaths_for_tilt < 2 {
            return Err(format!(
                "min_deaths_for_tilt must be >= 2, got {}",
                self.min_deaths_for_tilt
            ));
        }

        Ok(())
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AnalyzerConfig =
            toml::from_str(contents).context("Invalid analyzer config TOML")?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid analyzer config: {}", e))?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read config file {}", path_ref.display()))?;
        Self::from_toml_str(&contents)
    }
}
