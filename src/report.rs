//! Combined user report
//!
//! The document the dashboard renders: account, ranked standing, match ids,
//! the timeline analysis of the latest match and the enriched match list.

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisReport;
use crate::league::{solo_queue, LeagueEntry};
use crate::match_summary::MatchSummary;
use crate::riot_id::RiotId;

/// Format identifier written into every report
pub const REPORT_FORMAT: &str = "riftlens-report-v1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub puuid: Option<String>,
}

/// Root report structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserReport {
    /// Crate version that produced the report
    pub version: String,
    /// Format name
    pub format: String,
    pub user_info: UserInfo,
    pub league: Vec<LeagueEntry>,
    /// Solo-queue wins + losses, absent when the player is unranked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_matches: Option<u64>,
    pub match_ids: Vec<String>,
    pub analysis: AnalysisReport,
    pub match_details: Vec<MatchSummary>,
}

impl UserReport {
    pub fn new(riot_id: &RiotId, puuid: Option<String>, analysis: AnalysisReport) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: REPORT_FORMAT.to_string(),
            user_info: UserInfo {
                name: riot_id.game_name.clone(),
                tag: riot_id.tag_line.clone(),
                puuid,
            },
            league: Vec::new(),
            total_matches: None,
            match_ids: Vec::new(),
            analysis,
            match_details: Vec::new(),
        }
    }

    /// Attach league entries; the solo queue decides `total_matches`
    pub fn with_league(mut self, entries: Vec<LeagueEntry>) -> Self {
        self.total_matches = solo_queue(&entries).map(LeagueEntry::total_games);
        self.league = entries;
        self
    }

    pub fn with_match_ids(mut self, match_ids: Vec<String>) -> Self {
        self.match_ids = match_ids;
        self
    }

    pub fn with_matches(mut self, matches: Vec<MatchSummary>) -> Self {
        self.match_details = matches;
        self
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
