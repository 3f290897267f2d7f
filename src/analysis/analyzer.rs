// Timeline analyzer: macro score, tilt index and position trace
//
// Single pass over the frames collects the participant's positions and the
// timestamps of the kill events in which they were the victim. Both metrics
// are derived from those two accumulators afterwards.

use serde_json::Value;
use tracing::{debug, warn};

use super::error::AnalysisError;
use super::result::{AnalysisReport, AnalysisResult};
use crate::config::AnalyzerConfig;
use crate::participant::ParticipantId;
use crate::stats::{consecutive_intervals, IntervalStats};
use crate::timeline::{Frame, Position, TimelineDocument};

/// Stateless timeline analyzer
///
/// Holds only immutable configuration, so one instance can be shared
/// between threads and reused for any number of timelines.
///
/// # Example
/// ```
/// use riftlens::analysis::TimelineAnalyzer;
/// use riftlens::participant::ParticipantId;
/// use serde_json::json;
///
/// let timeline = json!({"info": {"frames": [
///     {"participantFrames": {"1": {"position": {"x": 9800, "y": 4400}}}, "events": []}
/// ]}});
///
/// let analyzer = TimelineAnalyzer::default();
/// let result = analyzer.analyze_value(&timeline, ParticipantId::DEFAULT).unwrap();
/// assert_eq!(result.macro_score, 100.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimelineAnalyzer {
    config: AnalyzerConfig,
}

/// Accumulators filled by the extraction pass
#[derive(Debug, Default)]
struct Extraction {
    positions: Vec<Position>,
    death_timestamps: Vec<u64>,
}

impl TimelineAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyse a typed timeline document for one participant
    pub fn analyze(
        &self,
        timeline: &TimelineDocument,
        participant: ParticipantId,
    ) -> Result<AnalysisResult, AnalysisError> {
        let info = timeline
            .info
            .as_ref()
            .ok_or(AnalysisError::MissingInfoSection)?;
        let frames = info
            .frames
            .as_deref()
            .ok_or(AnalysisError::MissingFrameData)?;

        let extraction = self.extract(frames, participant)?;
        let macro_score = self.macro_score(&extraction.positions, frames.len());
        let (tilt_index, death_intervals) = self.tilt_index(&extraction.death_timestamps);

        let mut positions = extraction.positions;
        positions.truncate(self.config.max_positions);

        debug!(
            participant = %participant,
            frames = frames.len(),
            deaths = extraction.death_timestamps.len(),
            macro_score,
            tilt_index,
            "timeline analysed"
        );

        Ok(AnalysisResult {
            macro_score,
            tilt_index,
            positions,
            frame_count: frames.len(),
            death_timestamps: extraction.death_timestamps,
            death_intervals,
        })
    }

    /// Analyse a raw JSON timeline, converting it to typed records first
    pub fn analyze_value(
        &self,
        timeline: &Value,
        participant: ParticipantId,
    ) -> Result<AnalysisResult, AnalysisError> {
        let document = TimelineDocument::from_value(timeline)?;
        self.analyze(&document, participant)
    }

    /// Analyse a raw JSON timeline and always return a well-formed report
    pub fn analyze_report(&self, timeline: &Value, participant: ParticipantId) -> AnalysisReport {
        report_outcome(&self.analyze_value(timeline, participant), participant)
    }

    fn extract(
        &self,
        frames: &[Frame],
        participant: ParticipantId,
    ) -> Result<Extraction, AnalysisError> {
        let mut extraction = Extraction::default();

        for (index, frame) in frames.iter().enumerate() {
            let participant_frames = frame.participant_frames.as_ref().ok_or_else(|| {
                AnalysisError::StructuralAnomaly(format!(
                    "frame {} has no participantFrames",
                    index
                ))
            })?;

            if let Some(snapshot) = participant_frames.get(&participant) {
                let position = snapshot.position.ok_or_else(|| {
                    AnalysisError::StructuralAnomaly(format!(
                        "frame {}: participant {} has no position",
                        index, participant
                    ))
                })?;
                extraction.positions.push(position);
            }

            let events = frame.events.as_ref().ok_or_else(|| {
                AnalysisError::StructuralAnomaly(format!("frame {} has no events", index))
            })?;

            for event in events
                .iter()
                .filter(|e| e.is_champion_kill() && e.victim_id == Some(participant))
            {
                let timestamp = event.timestamp.ok_or_else(|| {
                    AnalysisError::StructuralAnomaly(format!(
                        "frame {}: kill event without timestamp",
                        index
                    ))
                })?;
                extraction.death_timestamps.push(timestamp);
            }
        }

        Ok(extraction)
    }

    /// Percentage of all frames in which the participant was near the objective
    fn macro_score(&self, positions: &[Position], frame_count: usize) -> f64 {
        if frame_count == 0 {
            return 0.0;
        }

        let objective = self.config.objective();
        let near = positions
            .iter()
            .filter(|p| p.distance_to(&objective) < self.config.objective_radius)
            .count();

        // Frames without a position still count in the denominator
        (near as f64 / frame_count as f64) * 100.0
    }

    /// Standard deviation of death spacing in seconds
    fn tilt_index(&self, death_timestamps: &[u64]) -> (f64, Option<IntervalStats>) {
        let intervals = consecutive_intervals(death_timestamps);
        let stats = IntervalStats::from_samples(&intervals);

        if death_timestamps.len() < self.config.min_deaths_for_tilt {
            return (0.0, stats);
        }

        let tilt = stats.as_ref().map_or(0.0, |s| s.stddev / 1000.0);
        (tilt, stats)
    }
}

/// Fold an analysis outcome into the wire report, logging degraded results
pub fn report_outcome(
    outcome: &Result<AnalysisResult, AnalysisError>,
    participant: ParticipantId,
) -> AnalysisReport {
    match outcome {
        Ok(result) => result.clone().into(),
        Err(err) => {
            warn!(participant = %participant, kind = err.kind(), "analysis degraded: {}", err);
            AnalysisReport::from_error(err)
        }
    }
}

/// Analyse a raw timeline with the default configuration
pub fn analyze_timeline(timeline: &Value, participant: ParticipantId) -> AnalysisReport {
    TimelineAnalyzer::default().analyze_report(timeline, participant)
}
