//! Human-readable text output for analyses and reports

use std::io::{self, Write};

use crate::analysis::{AnalysisReport, AnalysisResult};
use crate::report::UserReport;

/// Write an analysis summary
///
/// `details` carries the death statistics when the analysis succeeded.
pub fn write_analysis<W: Write>(
    out: &mut W,
    report: &AnalysisReport,
    details: Option<&AnalysisResult>,
) -> io::Result<()> {
    if let Some(error) = &report.error {
        writeln!(out, "analysis failed: {}", error)?;
        return Ok(());
    }

    writeln!(out, "macro score:  {:.2}%", report.macro_score)?;
    writeln!(out, "tilt index:   {:.3}s", report.tilt_index)?;

    if let Some(result) = details {
        writeln!(out, "frames:       {}", result.frame_count)?;
        writeln!(out, "deaths:       {}", result.death_count())?;
        if let Some(stats) = &result.death_intervals {
            writeln!(
                out,
                "death gap:    mean {:.1}s, min {:.1}s, max {:.1}s",
                stats.mean / 1000.0,
                stats.min / 1000.0,
                stats.max / 1000.0
            )?;
        }
    }

    writeln!(out, "positions:    {}", report.positions.len())?;
    for (i, pos) in report.positions.iter().enumerate() {
        writeln!(out, "  {:>2}: ({:.0}, {:.0})", i, pos.x, pos.y)?;
    }

    Ok(())
}

/// Write a full user report
pub fn write_report<W: Write>(out: &mut W, report: &UserReport) -> io::Result<()> {
    writeln!(
        out,
        "=== {}#{} ===",
        report.user_info.name, report.user_info.tag
    )?;

    if report.league.is_empty() {
        writeln!(out, "unranked")?;
    }
    for entry in &report.league {
        writeln!(
            out,
            "{:<16} {} {} {} LP ({}W {}L)",
            entry.queue_type, entry.tier, entry.rank, entry.league_points, entry.wins, entry.losses
        )?;
    }
    if let Some(total) = report.total_matches {
        writeln!(out, "ranked solo games: {}", total)?;
    }
    writeln!(out)?;

    writeln!(out, "--- latest match analysis ---")?;
    write_analysis(out, &report.analysis, None)?;
    writeln!(out)?;

    writeln!(out, "--- recent matches ({}) ---", report.match_details.len())?;
    for summary in &report.match_details {
        let me = &summary.my_stats;
        writeln!(
            out,
            "{} {:<8} {:<12} {}/{}/{} {}",
            if me.win { "W" } else { "L" },
            summary.game_mode.as_deref().unwrap_or("?"),
            me.champion_name,
            me.kills,
            me.deaths,
            me.assists,
            summary.match_id
        )?;
    }

    Ok(())
}
