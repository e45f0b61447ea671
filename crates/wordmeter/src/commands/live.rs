//! Live command: re-analyze standard input after every line.
//!
//! Each line read is treated as an edit to a growing document, and the
//! whole document is analyzed again, as an editor widget does on every
//! keystroke.

use std::io::BufRead;
use std::num::{NonZeroU32, NonZeroUsize};

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordmeter_core::Config;
use wordmeter_core::session::{Snapshot, parse_char_limit};

use super::stats::session_for;

/// Arguments for the `live` subcommand.
#[derive(Args, Debug)]
pub struct LiveArgs {
    /// Leave whitespace out of the character count.
    #[arg(long)]
    pub exclude_spaces: bool,

    /// Reading speed in words per minute.
    #[arg(long, value_name = "N")]
    pub wpm: Option<NonZeroU32>,

    /// Letters shown per update.
    #[arg(long, value_name = "K")]
    pub top: Option<NonZeroUsize>,

    /// Stop accepting text after N characters.
    #[arg(long, value_name = "N", value_parser = parse_char_limit)]
    pub limit: Option<NonZeroUsize>,
}

/// Read lines from standard input and print fresh statistics after each one.
#[instrument(name = "cmd_live", skip_all)]
pub fn cmd_live(args: LiveArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(exclude_spaces = args.exclude_spaces, limit = ?args.limit, "executing live command");

    let limit = args.limit.or(config.char_limit);
    let mut session = session_for(config, args.wpm, args.top, limit);
    session.set_exclude_spaces(args.exclude_spaces || config.exclude_spaces);

    let max_bytes = config.input_limit();
    let stdin = std::io::stdin().lock();
    let mut edits = 0usize;
    for line in stdin.lines() {
        let line = line.context("failed to read standard input")?;
        let edit = if session.text().is_empty() {
            line
        } else {
            format!("\n{line}")
        };
        if let Some(max) = max_bytes
            && session.text().len() + edit.len() > max
        {
            anyhow::bail!("input too large: live text exceeds {max} bytes");
        }
        let snapshot = session.push_str(&edit);
        edits += 1;

        if global_json {
            println!("{}", serde_json::to_string(&snapshot)?);
        } else {
            println!("{}", summary_line(&snapshot));
        }
    }

    debug!(edits, "input closed");
    Ok(())
}

/// One-line rendering of a snapshot.
fn summary_line(snapshot: &Snapshot) -> String {
    let report = &snapshot.report;
    let letters: Vec<String> = snapshot
        .visible_density
        .iter()
        .map(|d| format!("{} {:.1}%", d.letter, d.percentage))
        .collect();

    let mut line = format!(
        "{} chars · {} words · {} sentences · {}",
        report.character_count, report.word_count, report.sentence_count, report.reading_time,
    );
    if !letters.is_empty() {
        line.push_str(&format!(" · {}", letters.join(", ").dimmed()));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordmeter_core::EditorSession;

    #[test]
    fn summary_line_lists_counts_and_letters() {
        let mut session = EditorSession::default();
        let snapshot = session.set_text("Hi there.");
        let line = summary_line(&snapshot);
        assert!(line.starts_with("9 chars · 2 words · 1 sentences · 1 minute"));
        assert!(line.contains("h 28.6%"));
    }

    #[test]
    fn summary_line_without_letters() {
        let snapshot = EditorSession::default().snapshot();
        let line = summary_line(&snapshot);
        assert_eq!(line, "0 chars · 0 words · 0 sentences · 0 minute");
    }
}
