//! Match timeline document model
//!
//! Typed view of the timeline JSON returned by the statistics API:
//!
//! ```text
//! { "info": { "frames": [ { "participantFrames": { "1": { "position": {..} } },
//!                           "events": [ { "type": .., "victimId": .., "timestamp": .. } ] } ] } }
//! ```
//!
//! Everything the upstream API may omit is an `Option`, so a partially
//! populated document still deserializes and the analyzer can report exactly
//! which piece is missing.

use crate::participant::ParticipantId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Event type tag for a regular champion kill
pub const CHAMPION_KILL: &str = "CHAMPION_KILL";

/// Event type tag for multi-kills, first bloods and other special kills
pub const CHAMPION_SPECIAL_KILL: &str = "CHAMPION_SPECIAL_KILL";

/// Top-level timeline document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<TimelineInfo>,
}

/// `info` section of a timeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames: Option<Vec<Frame>>,

    /// Frame spacing in milliseconds (60000 for ranked matches)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_interval: Option<u64>,
}

/// One per-interval snapshot of the match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_frames: Option<HashMap<ParticipantId, ParticipantFrame>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

/// A participant's state at the end of a frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipantFrame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Map coordinate
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another coordinate
    pub fn distance_to(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A discrete happening inside a frame's interval
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub victim_id: Option<ParticipantId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub killer_id: Option<ParticipantId>,

    /// Milliseconds since game start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

impl Event {
    /// True for the event kinds that represent a champion dying
    pub fn is_champion_kill(&self) -> bool {
        matches!(
            self.kind.as_deref(),
            Some(CHAMPION_KILL) | Some(CHAMPION_SPECIAL_KILL)
        )
    }
}

impl TimelineDocument {
    /// Convert a loosely typed JSON value into a timeline document
    ///
    /// `null` is treated as an empty document (no `info` section).
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Self::deserialize(value)
    }

    /// Frames of the document, if both `info` and `info.frames` are present
    pub fn frames(&self) -> Option<&[Frame]> {
        self.info.as_ref()?.frames.as_deref()
    }
}
