//! Ranked league entries

use serde::{Deserialize, Serialize};

/// Queue type of solo/duo ranked games
pub const RANKED_SOLO_QUEUE: &str = "RANKED_SOLO_5x5";

/// One ranked queue standing, as returned by the league endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntry {
    pub queue_type: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub league_points: i32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
}

impl LeagueEntry {
    /// Ranked games played in this queue
    pub fn total_games(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses)
    }

    /// Win rate in percent, `None` before the first game
    pub fn win_rate(&self) -> Option<f64> {
        let total = self.total_games();
        (total > 0).then(|| f64::from(self.wins) / total as f64 * 100.0)
    }
}

/// Solo/duo queue standing, if the player has one
pub fn solo_queue(entries: &[LeagueEntry]) -> Option<&LeagueEntry> {
    entries.iter().find(|e| e.queue_type == RANKED_SOLO_QUEUE)
}
