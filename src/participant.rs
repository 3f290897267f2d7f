//! Participant identifiers
//!
//! The statistics API keys `participantFrames` by the string form of the
//! participant slot (`"1"`..`"10"`) while kill events carry the numeric form
//! (`victimId: 1`). Both deserialize into the same [`ParticipantId`], so the
//! analysis code only ever compares integers.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of participant slots in a match
pub const MAX_PARTICIPANTS: u8 = 10;

/// Canonical participant slot identifier
///
/// [`ParticipantId::new`] and [`FromStr`] only build player slots 1..=10.
/// Deserialization keeps any `u8` slot as sent: `killerId: 0` marks a
/// minion or turret kill, so data ids are not range checked. Use
/// [`ParticipantId::is_player_slot`] where the distinction matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticipantId(u8);

impl ParticipantId {
    /// Participant slot the analysed user is normalized to upstream
    pub const DEFAULT: ParticipantId = ParticipantId(1);

    /// Create an id for a player slot, rejecting anything outside 1..=10
    pub fn new(slot: u8) -> Result<Self, String> {
        if (1..=MAX_PARTICIPANTS).contains(&slot) {
            Ok(Self(slot))
        } else {
            Err(format!(
                "participant id must be in 1..={}, got {}",
                MAX_PARTICIPANTS, slot
            ))
        }
    }

    /// Whether this id names one of the ten players
    pub fn is_player_slot(self) -> bool {
        (1..=MAX_PARTICIPANTS).contains(&self.0)
    }

    /// Raw slot number
    pub fn get(self) -> u8 {
        self.0
    }

    /// String key form used by `participantFrames`
    pub fn as_key(self) -> String {
        self.0.to_string()
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ParticipantId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slot: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("participant id must be an integer, got '{}'", s))?;
        Self::new(slot)
    }
}

impl Serialize for ParticipantId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

struct ParticipantIdVisitor;

impl<'de> Visitor<'de> for ParticipantIdVisitor {
    type Value = ParticipantId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a participant id as an integer or an integer string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        u8::try_from(v)
            .map(ParticipantId)
            .map_err(|_| E::custom(format!("participant id out of range: {}", v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u8::try_from(v)
            .map(ParticipantId)
            .map_err(|_| E::custom(format!("participant id out of range: {}", v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&v) {
            Ok(ParticipantId(v as u8))
        } else {
            Err(E::custom(format!("participant id is not a slot number: {}", v)))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.trim()
            .parse::<u8>()
            .map(ParticipantId)
            .map_err(|_| E::custom(format!("participant id is not an integer: '{}'", v)))
    }
}

impl<'de> Deserialize<'de> for ParticipantId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ParticipantIdVisitor)
    }
}
