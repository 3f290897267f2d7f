// Analysis output types
//
// `AnalysisResult` is the successful computation. `AnalysisReport` is the
// shape handed to the dashboard: the same three fields plus an optional
// `error`, with zeroed metrics whenever `error` is set.

use serde::{Deserialize, Serialize};

use super::error::AnalysisError;
use crate::stats::IntervalStats;
use crate::timeline::Position;

/// Metrics derived from one participant's timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Share of frames (0-100) spent near the objective
    pub macro_score: f64,

    /// Standard deviation of the gaps between deaths, in seconds
    pub tilt_index: f64,

    /// First positions of the participant, in frame order
    pub positions: Vec<Position>,

    /// Number of frames processed (the macro score denominator)
    #[serde(skip)]
    pub frame_count: usize,

    /// Death timestamps (ms) in the order they were recorded
    #[serde(skip)]
    pub death_timestamps: Vec<u64>,

    /// Spread of the death intervals, when at least one interval exists
    #[serde(skip)]
    pub death_intervals: Option<IntervalStats>,
}

impl AnalysisResult {
    /// Number of deaths recorded for the participant
    pub fn death_count(&self) -> usize {
        self.death_timestamps.len()
    }
}

/// Never-failing analysis output in the dashboard's wire format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub macro_score: f64,
    pub tilt_index: f64,
    pub positions: Vec<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisReport {
    /// Degraded report for a failed analysis
    pub fn from_error(err: &AnalysisError) -> Self {
        Self {
            macro_score: 0.0,
            tilt_index: 0.0,
            positions: Vec::new(),
            error: Some(err.to_string()),
        }
    }

    /// Canonical report for a document without an `info` section
    pub fn missing_timeline() -> Self {
        Self::from_error(&AnalysisError::MissingInfoSection)
    }

    /// Canonical report for a document whose frames are absent
    pub fn missing_frames() -> Self {
        Self::from_error(&AnalysisError::MissingFrameData)
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl From<AnalysisResult> for AnalysisReport {
    fn from(result: AnalysisResult) -> Self {
        Self {
            macro_score: result.macro_score,
            tilt_index: result.tilt_index,
            positions: result.positions,
            error: None,
        }
    }
}

impl From<Result<AnalysisResult, AnalysisError>> for AnalysisReport {
    fn from(outcome: Result<AnalysisResult, AnalysisError>) -> Self {
        match outcome {
            Ok(result) => result.into(),
            Err(err) => Self::from_error(&err),
        }
    }
}
