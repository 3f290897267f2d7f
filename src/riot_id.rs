//! Riot ID parsing (`GameName#TagLine`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RiotIdError {
    #[error("Riot ID must be in the form Name#Tag, got '{0}'")]
    MissingSeparator(String),

    #[error("Riot ID has an empty game name")]
    EmptyGameName,

    #[error("Riot ID has an empty tag line")]
    EmptyTagLine,
}

/// Account identifier made of a display name and a regional tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiotId {
    pub game_name: String,
    pub tag_line: String,
}

impl FromStr for RiotId {
    type Err = RiotIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, tag) = s
            .split_once('#')
            .ok_or_else(|| RiotIdError::MissingSeparator(s.to_string()))?;

        let game_name = name.trim();
        let tag_line = tag.trim();

        if game_name.is_empty() {
            return Err(RiotIdError::EmptyGameName);
        }
        if tag_line.is_empty() {
            return Err(RiotIdError::EmptyTagLine);
        }

        Ok(Self {
            game_name: game_name.to_string(),
            tag_line: tag_line.to_string(),
        })
    }
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let id: RiotId = "Hide on bush#KR1".parse().unwrap();
        assert_eq!(id.game_name, "Hide on bush");
        assert_eq!(id.tag_line, "KR1");
        assert_eq!(id.to_string(), "Hide on bush#KR1");
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            "Faker".parse::<RiotId>(),
            Err(RiotIdError::MissingSeparator("Faker".to_string()))
        );
    }

    #[test]
    fn test_empty_parts() {
        assert_eq!("#KR1".parse::<RiotId>(), Err(RiotIdError::EmptyGameName));
        assert_eq!("Faker#".parse::<RiotId>(), Err(RiotIdError::EmptyTagLine));
    }

    #[test]
    fn test_only_first_separator_splits() {
        let id: RiotId = "가나다#KR#1".parse().unwrap();
        assert_eq!(id.game_name, "가나다");
        assert_eq!(id.tag_line, "KR#1");
    }
}
