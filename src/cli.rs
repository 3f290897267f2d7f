//! CLI argument parsing for riftlens

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::participant::ParticipantId;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "riftlens")]
#[command(version)]
#[command(about = "Macro score and tilt index from match timelines", long_about = None)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Analyzer configuration file (TOML)
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyse a single match timeline
    Analyze {
        /// Timeline JSON file
        #[arg(value_name = "TIMELINE")]
        timeline: PathBuf,

        /// Participant slot to analyse (1-10)
        #[arg(short = 'p', long = "participant", default_value = "1")]
        participant: ParticipantId,
    },

    /// Build the full user report from downloaded API documents
    Report {
        /// Riot ID of the player (Name#Tag)
        #[arg(long = "riot-id", value_name = "NAME#TAG")]
        riot_id: String,

        /// Player PUUID, used to find the player in match details
        #[arg(long = "puuid")]
        puuid: Option<String>,

        /// Timeline JSON file of the latest match
        #[arg(long = "timeline", value_name = "FILE")]
        timeline: PathBuf,

        /// League entries JSON file
        #[arg(long = "league", value_name = "FILE")]
        league: Option<PathBuf>,

        /// Match detail JSON file (array of match documents)
        #[arg(long = "matches", value_name = "FILE")]
        matches: Option<PathBuf>,

        /// Match id JSON file (array of strings)
        #[arg(long = "match-ids", value_name = "FILE")]
        match_ids: Option<PathBuf>,

        /// Maximum number of match summaries in the report
        #[arg(long = "match-limit", default_value = "20")]
        match_limit: usize,

        /// Participant slot of the player in the timeline (1-10)
        #[arg(short = 'p', long = "participant", default_value = "1")]
        participant: ParticipantId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_analyze_defaults() {
        let cli = Cli::parse_from(["riftlens", "analyze", "timeline.json"]);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.debug);
        match cli.command {
            Command::Analyze {
                timeline,
                participant,
            } => {
                assert_eq!(timeline, PathBuf::from("timeline.json"));
                assert_eq!(participant, ParticipantId::DEFAULT);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_cli_participant_flag() {
        let cli = Cli::parse_from(["riftlens", "analyze", "t.json", "-p", "7"]);
        match cli.command {
            Command::Analyze { participant, .. } => assert_eq!(participant.get(), 7),
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_cli_rejects_participant_out_of_range() {
        assert!(Cli::try_parse_from(["riftlens", "analyze", "t.json", "-p", "11"]).is_err());
        assert!(Cli::try_parse_from(["riftlens", "analyze", "t.json", "-p", "x"]).is_err());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["riftlens", "analyze", "t.json", "--format", "json", "--debug"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.debug);
    }

    #[test]
    fn test_cli_report() {
        let cli = Cli::parse_from([
            "riftlens",
            "report",
            "--riot-id",
            "Faker#KR1",
            "--timeline",
            "t.json",
            "--matches",
            "m.json",
        ]);
        match cli.command {
            Command::Report {
                riot_id,
                matches,
                match_limit,
                league,
                ..
            } => {
                assert_eq!(riot_id, "Faker#KR1");
                assert_eq!(matches, Some(PathBuf::from("m.json")));
                assert_eq!(match_limit, 20);
                assert!(league.is_none());
            }
            _ => panic!("expected report"),
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["riftlens"]).is_err());
    }
}
