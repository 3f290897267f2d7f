//! Match list enrichment
//!
//! Turns match-detail documents into the summary cards shown next to the
//! timeline analysis: the user's own line plus a row per participant with
//! KDA, vision, wards, CS, damage and gold.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum MatchSummaryError {
    #[error("match detail has no matchId")]
    MissingMatchId,

    #[error("match {0} has no participants")]
    MissingParticipants(String),

    #[error("malformed match detail: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Participant entry of a match detail, as sent by the match endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawParticipant {
    pub puuid: Option<String>,
    pub team_id: Option<u32>,
    pub win: Option<bool>,
    pub champion_name: Option<String>,
    pub team_position: Option<String>,
    pub riot_id_game_name: Option<String>,
    pub riot_id_tagline: Option<String>,
    pub kills: Option<u32>,
    pub deaths: Option<u32>,
    pub assists: Option<u32>,
    pub vision_score: Option<u32>,
    pub wards_killed: Option<u32>,
    pub wards_placed: Option<u32>,
    pub total_minions_killed: Option<u32>,
    pub neutral_minions_killed: Option<u32>,
    pub total_damage_dealt_to_champions: Option<u64>,
    pub gold_earned: Option<u64>,
    pub challenges: Option<Challenges>,
}

/// Subset of the `challenges` block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Challenges {
    pub kda: Option<f64>,
}

/// Match detail reduced to the fields the summary needs
#[derive(Debug, Clone, PartialEq)]
pub struct MatchDetail {
    pub match_id: String,
    pub game_mode: Option<String>,
    pub game_duration: Option<u64>,
    pub participants: Vec<RawParticipant>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DetailFields {
    match_id: Option<String>,
    game_mode: Option<String>,
    game_duration: Option<u64>,
    participants: Option<Vec<RawParticipant>>,
}

/// `metadata` block of the API document; its `participants` is a puuid list
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct MatchMetadata {
    match_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMatch {
    metadata: Option<MatchMetadata>,
    info: Option<DetailFields>,
    #[serde(flatten)]
    flat: DetailFields,
}

impl MatchDetail {
    /// Accepts either the raw API document (`metadata` + `info`) or the
    /// flattened `{matchId, gameMode, gameDuration, participants}` form.
    pub fn from_value(value: &Value) -> Result<Self, MatchSummaryError> {
        let raw = RawMatch::deserialize(value)?;
        let metadata = raw.metadata.unwrap_or_default();
        let info = raw.info.unwrap_or_default();
        let flat = raw.flat;

        let match_id = flat
            .match_id
            .or(metadata.match_id)
            .ok_or(MatchSummaryError::MissingMatchId)?;
        let participants = flat
            .participants
            .or(info.participants)
            .ok_or_else(|| MatchSummaryError::MissingParticipants(match_id.clone()))?;

        Ok(Self {
            match_id,
            game_mode: flat.game_mode.or(info.game_mode),
            game_duration: flat.game_duration.or(info.game_duration),
            participants,
        })
    }
}

/// The user's own line of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyStats {
    pub win: bool,
    #[serde(rename = "championName")]
    pub champion_name: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
}

/// One row of the ten-participant table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantRow {
    pub puuid: Option<String>,
    #[serde(rename = "teamId")]
    pub team_id: Option<u32>,
    pub win: Option<bool>,
    #[serde(rename = "championName")]
    pub champion_name: String,
    #[serde(rename = "teamPosition")]
    pub team_position: Option<String>,
    #[serde(rename = "summonerName")]
    pub summoner_name: String,
    pub kda_str: String,
    pub kda_score: f64,
    #[serde(rename = "visionScore")]
    pub vision_score: Option<u32>,
    pub wards: String,
    pub cs: u32,
    pub damage: Option<u64>,
    pub gold: Option<u64>,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
}

impl From<&RawParticipant> for ParticipantRow {
    fn from(p: &RawParticipant) -> Self {
        let kills = p.kills.unwrap_or(0);
        let deaths = p.deaths.unwrap_or(0);
        let assists = p.assists.unwrap_or(0);

        Self {
            puuid: p.puuid.clone(),
            team_id: p.team_id,
            win: p.win,
            champion_name: p.champion_name.clone().unwrap_or_default(),
            team_position: p.team_position.clone(),
            summoner_name: format!(
                "{} #{}",
                p.riot_id_game_name.as_deref().unwrap_or_default(),
                p.riot_id_tagline.as_deref().unwrap_or_default()
            ),
            kda_str: format!("{}/{}/{}", kills, deaths, assists),
            kda_score: p.challenges.as_ref().and_then(|c| c.kda).unwrap_or(0.0),
            vision_score: p.vision_score,
            wards: format!(
                "{}/{}",
                p.wards_killed.unwrap_or(0),
                p.wards_placed.unwrap_or(0)
            ),
            cs: p
                .total_minions_killed
                .unwrap_or(0)
                .saturating_add(p.neutral_minions_killed.unwrap_or(0)),
            damage: p.total_damage_dealt_to_champions,
            gold: p.gold_earned,
            kills,
            deaths,
            assists,
        }
    }
}

/// Summary card of one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    #[serde(rename = "matchId")]
    pub match_id: String,
    #[serde(rename = "gameMode")]
    pub game_mode: Option<String>,
    #[serde(rename = "gameDuration")]
    pub game_duration: Option<u64>,
    pub my_stats: MyStats,
    pub participants: Vec<ParticipantRow>,
}

impl MatchSummary {
    /// Build the card for `puuid`, `None` if they did not play in the match
    pub fn for_player(detail: &MatchDetail, puuid: &str) -> Option<Self> {
        let me = detail
            .participants
            .iter()
            .find(|p| p.puuid.as_deref() == Some(puuid))?;

        Some(Self {
            match_id: detail.match_id.clone(),
            game_mode: detail.game_mode.clone(),
            game_duration: detail.game_duration,
            my_stats: MyStats {
                win: me.win.unwrap_or(false),
                champion_name: me.champion_name.clone().unwrap_or_default(),
                kills: me.kills.unwrap_or(0),
                deaths: me.deaths.unwrap_or(0),
                assists: me.assists.unwrap_or(0),
            },
            participants: detail.participants.iter().map(ParticipantRow::from).collect(),
        })
    }
}

/// Summarize up to `limit` matches for a player
///
/// Malformed documents are skipped with a warning, as are matches the
/// player is not part of.
pub fn summarize_matches(details: &[Value], puuid: &str, limit: usize) -> Vec<MatchSummary> {
    details
        .iter()
        .take(limit)
        .filter_map(|value| match MatchDetail::from_value(value) {
            Ok(detail) => MatchSummary::for_player(&detail, puuid),
            Err(e) => {
                warn!("Skipping match detail: {}", e);
                None
            }
        })
        .collect()
}
