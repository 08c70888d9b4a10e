//! Shared output formatting for run summaries.

use anyhow::Result;
use std::fmt::Write as _;
use std::io::IsTerminal;
use style_lint_core::{RunOutcome, RunSummary};

use crate::OutputFormat;

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Print a run summary in the specified format.
pub fn print(summary: &RunSummary, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(summary, std::io::stdout().is_terminal()),
        OutputFormat::Json => serde_json::to_string_pretty(summary)?,
        OutputFormat::Compact => render_compact(summary),
    };
    println!("{rendered}");
    Ok(())
}

/// Renders per-file issue blocks, unreadable files and a closing summary.
fn render_text(summary: &RunSummary, color: bool) -> String {
    let paint = |code: &'static str| if color { code } else { "" };
    let reset = paint(RESET);
    let mut out = String::new();

    for report in summary.reports.iter().filter(|r| r.has_issues()) {
        let _ = writeln!(out, "{}Issues in file: {}{reset}", paint(BOLD), report.file);
        for (i, finding) in report.findings.iter().enumerate() {
            let _ = writeln!(out, "  Issue {} - {}", i + 1, finding.describe());
        }
        out.push('\n');
    }

    for file in &summary.unreadable {
        let _ = writeln!(
            out,
            "{}Could not read file: {} ({}){reset}",
            paint(YELLOW),
            file.file,
            file.reason
        );
    }
    if !summary.unreadable.is_empty() {
        out.push('\n');
    }

    match summary.outcome() {
        RunOutcome::NoFiles => {
            let what = if summary.unreadable.is_empty() {
                "No source files found."
            } else {
                "No readable source files found."
            };
            let _ = write!(out, "{}{what}{reset}", paint(YELLOW));
        }
        RunOutcome::Clean => {
            let _ = write!(
                out,
                "{}No code quality issues found in any files.{reset}",
                paint(GREEN)
            );
        }
        RunOutcome::IssuesFound => {
            let (errors, warnings, infos) = summary.count_by_severity();
            let tint = if errors > 0 { RED } else { YELLOW };
            let _ = write!(
                out,
                "{}Found {errors} error(s), {warnings} warning(s), {infos} info(s) in {} of {} file(s){reset}",
                paint(tint),
                summary.files_with_issues(),
                summary.files_scanned(),
            );
        }
    }

    out
}

fn render_compact(summary: &RunSummary) -> String {
    summary
        .findings()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
