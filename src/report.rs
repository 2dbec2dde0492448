use crate::model::{MergedMatch, ReportError};
use crate::utils::GMT3;
use std::fmt::Write as _;
use std::fs;

const SEPARATOR_WIDTH: usize = 50;
const MISSING: &str = "N/A";

/// Renders the plain-text report. Field order and labels are consumed downstream; keep them stable.
pub fn render_report(matches: &[MergedMatch]) -> String {
    let mut out = String::new();
    for m in matches {
        let match_id = m.extras.match_id().unwrap_or(MISSING);
        let (home_logo, away_logo) = m.extras.logos().unwrap_or((MISSING, MISSING));
        let kickoff = m.kickoff.with_timezone(&GMT3).format("%Y-%m-%d %H:%M");

        // writing into a String cannot fail
        let _ = writeln!(out, "\u{1F3DF}\u{FE0F} Match: {} Vs {}", m.home, m.away);
        let _ = writeln!(out, "\u{1F194} Match ID: {}", match_id);
        let _ = writeln!(out, "\u{1F552} Start: {} (GMT+3)", kickoff);
        let _ = writeln!(out, "\u{1F4CD} Tournament: {}", m.competition);
        let _ = writeln!(out, "\u{1F4FA} Channels: {}", m.channels.join(", "));
        let _ = writeln!(out, "\u{1F5BC}\u{FE0F} Home Logo: {}", home_logo);
        let _ = writeln!(out, "\u{1F5BC}\u{FE0F} Away Logo: {}", away_logo);
        out.push_str(&"-".repeat(SEPARATOR_WIDTH));
        out.push('\n');
    }
    out
}

pub fn write_report(path: &str, matches: &[MergedMatch]) -> Result<(), ReportError> {
    fs::write(path, render_report(matches))?;
    Ok(())
}
