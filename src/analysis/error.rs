// Error taxonomy for timeline analysis
//
// None of these escape as panics: the analyzer returns them as values and
// `AnalysisReport::from_error` turns them into the degraded wire shape.

use thiserror::Error;

/// Reasons a timeline could not be analysed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The document has no top-level `info` block
    #[error("timeline data missing")]
    MissingInfoSection,

    /// `info` is present but `info.frames` is absent or null
    #[error("frame data missing")]
    MissingFrameData,

    /// Any other malformed nested field
    #[error("malformed timeline: {0}")]
    StructuralAnomaly(String),
}

impl AnalysisError {
    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::MissingInfoSection => "missing_info_section",
            AnalysisError::MissingFrameData => "missing_frame_data",
            AnalysisError::StructuralAnomaly(_) => "structural_anomaly",
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::StructuralAnomaly(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            AnalysisError::MissingInfoSection.to_string(),
            "timeline data missing"
        );
        assert_eq!(
            AnalysisError::MissingFrameData.to_string(),
            "frame data missing"
        );
        assert_eq!(
            AnalysisError::StructuralAnomaly("frame 2 has no events".into()).to_string(),
            "malformed timeline: frame 2 has no events"
        );
    }

    #[test]
    fn test_serde_errors_become_structural() {
        let err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let analysis_err: AnalysisError = err.into();
        assert_eq!(analysis_err.kind(), "structural_anomaly");
    }
}
