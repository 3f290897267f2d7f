// Match timeline analysis
//
// Converts the per-minute frames of a match timeline into:
// - macro score: share of frames spent near a fixed objective (0-100)
// - tilt index: standard deviation of the gaps between deaths, in seconds
// - positions: the first samples of the participant's position trace
//
// The analyzer is pure. It performs no I/O and keeps no state between calls.

mod analyzer;
mod error;
mod result;

pub use analyzer::{analyze_timeline, report_outcome, TimelineAnalyzer};
pub use error::AnalysisError;
pub use result::{AnalysisReport, AnalysisResult};
