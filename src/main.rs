use anyhow::{Context, Result};
use clap::Parser;
use riftlens::analysis::{report_outcome, TimelineAnalyzer};
use riftlens::cli::{Cli, Command, OutputFormat};
use riftlens::config::AnalyzerConfig;
use riftlens::league::LeagueEntry;
use riftlens::match_summary::summarize_matches;
use riftlens::participant::ParticipantId;
use riftlens::report::UserReport;
use riftlens::riot_id::RiotId;
use riftlens::text_output;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Read and parse a JSON document from disk
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn load_config(path: Option<&Path>) -> Result<AnalyzerConfig> {
    match path {
        Some(path) => {
            let config = AnalyzerConfig::from_file(path)?;
            debug!(path = %path.display(), "loaded analyzer config");
            Ok(config)
        }
        None => Ok(AnalyzerConfig::default()),
    }
}

fn run_analyze(
    analyzer: &TimelineAnalyzer,
    timeline_path: &Path,
    participant: ParticipantId,
    format: OutputFormat,
) -> Result<()> {
    let timeline: Value = read_json(timeline_path)?;
    let outcome = analyzer.analyze_value(&timeline, participant);
    let report = report_outcome(&outcome, participant);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            text_output::write_analysis(&mut out, &report, outcome.as_ref().ok())?;
        }
    }
    Ok(())
}

struct ReportInputs {
    riot_id: String,
    puuid: Option<String>,
    timeline: PathBuf,
    league: Option<PathBuf>,
    matches: Option<PathBuf>,
    match_ids: Option<PathBuf>,
    match_limit: usize,
    participant: ParticipantId,
}

fn run_report(analyzer: &TimelineAnalyzer, inputs: ReportInputs, format: OutputFormat) -> Result<()> {
    let riot_id: RiotId = inputs.riot_id.parse()?;

    let timeline: Value = read_json(&inputs.timeline)?;
    let analysis = analyzer.analyze_report(&timeline, inputs.participant);

    let league: Vec<LeagueEntry> = match &inputs.league {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };

    let match_ids: Vec<String> = match &inputs.match_ids {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };

    let matches = match (&inputs.matches, &inputs.puuid) {
        (Some(path), Some(puuid)) => {
            let details: Vec<Value> = read_json(path)?;
            summarize_matches(&details, puuid, inputs.match_limit)
        }
        (Some(_), None) => {
            anyhow::bail!("--matches requires --puuid to find the player in each match");
        }
        (None, _) => Vec::new(),
    };

    let report = UserReport::new(&riot_id, inputs.puuid, analysis)
        .with_league(league)
        .with_match_ids(match_ids)
        .with_matches(matches);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Json => writeln!(out, "{}", report.to_json_pretty()?)?,
        OutputFormat::Text => text_output::write_report(&mut out, &report)?,
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = load_config(args.config.as_deref())?;
    let analyzer = TimelineAnalyzer::new(config);

    match args.command {
        Command::Analyze {
            timeline,
            participant,
        } => run_analyze(&analyzer, &timeline, participant, args.format)?,
        Command::Report {
            riot_id,
            puuid,
            timeline,
            league,
            matches,
            match_ids,
            match_limit,
            participant,
        } => run_report(
            &analyzer,
            ReportInputs {
                riot_id,
                puuid,
                timeline,
                league,
                matches,
                match_ids,
                match_limit,
                participant,
            },
            args.format,
        )?,
    }

    Ok(())
}
