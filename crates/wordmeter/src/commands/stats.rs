//! Stats command: every statistic for one text.

use std::num::{NonZeroU32, NonZeroUsize};

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordmeter_core::Config;
use wordmeter_core::session::{EditorSession, Snapshot, parse_char_limit};

use super::{print_density, read_input};

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// File to analyze (`-` for standard input).
    pub file: Utf8PathBuf,

    /// Leave whitespace out of the character count.
    #[arg(long)]
    pub exclude_spaces: bool,

    /// Reading speed in words per minute.
    #[arg(long, value_name = "N")]
    pub wpm: Option<NonZeroU32>,

    /// Number of letters to show.
    #[arg(long, value_name = "K", conflicts_with = "all")]
    pub top: Option<NonZeroUsize>,

    /// Show every letter.
    #[arg(long)]
    pub all: bool,

    /// Only analyze the first N characters.
    #[arg(long, value_name = "N", value_parser = parse_char_limit)]
    pub limit: Option<NonZeroUsize>,
}

/// Build a session from shared display flags and the loaded configuration.
///
/// `limit` is taken as given; only `live` falls back to the configured
/// `char_limit`.
pub(crate) fn session_for(
    config: &Config,
    wpm: Option<NonZeroU32>,
    top: Option<NonZeroUsize>,
    limit: Option<NonZeroUsize>,
) -> EditorSession {
    let mut options = config.analysis_options();
    if let Some(wpm) = wpm {
        options.words_per_minute = wpm;
    }
    let top = top.map_or(config.density_top, NonZeroUsize::get);
    let mut session = EditorSession::new(options, top);
    session.set_char_limit(limit);
    session
}

/// Print every statistic for a file.
#[instrument(name = "cmd_stats", skip_all, fields(file = %args.file))]
pub fn cmd_stats(args: StatsArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, exclude_spaces = args.exclude_spaces, "executing stats command");

    let content = read_input(&args.file, config.input_limit())?;

    let mut session = session_for(config, args.wpm, args.top, args.limit);
    session.set_exclude_spaces(args.exclude_spaces || config.exclude_spaces);
    if args.all {
        session.toggle_expanded();
    }
    let snapshot = session.set_text(content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    print_summary(&snapshot, session.excludes_spaces());

    if snapshot.report.density.is_empty() {
        println!("\n  {}", "No letters found.".dimmed());
        return Ok(());
    }

    println!("\n  {}", "Letter density".cyan());
    print_density(&snapshot.visible_density);
    print_hidden_hint(&snapshot);

    Ok(())
}

fn print_summary(snapshot: &Snapshot, excludes_spaces: bool) {
    let report = &snapshot.report;
    let characters_label = if excludes_spaces {
        "Characters (no spaces):"
    } else {
        "Characters:"
    };
    println!("  {} {}", characters_label.cyan(), report.character_count);
    println!("  {} {}", "Words:".cyan(), report.word_count);
    println!("  {} {}", "Sentences:".cyan(), report.sentence_count);
    println!("  {} {}", "Reading time:".cyan(), report.reading_time);
    if let Some(limit) = snapshot.char_limit {
        println!("  {} {}", "Limit:".cyan(), limit);
    }
}

/// Tell the user how many rows the collapsed view left out.
pub(crate) fn print_hidden_hint(snapshot: &Snapshot) {
    let hidden = snapshot.report.density.len() - snapshot.visible_density.len();
    if snapshot.has_more && hidden > 0 {
        println!(
            "  {}",
            format!("… {hidden} more letters (use --all)").dimmed()
        );
    }
}
