//! Density command: rank letters by frequency.

use std::num::NonZeroUsize;

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordmeter_core::Config;

use super::stats::{print_hidden_hint, session_for};
use super::{print_density, read_input};

/// Arguments for the `density` subcommand.
#[derive(Args, Debug)]
pub struct DensityArgs {
    /// File to analyze (`-` for standard input).
    pub file: Utf8PathBuf,

    /// Number of letters to show.
    #[arg(long, value_name = "K", conflicts_with = "all")]
    pub top: Option<NonZeroUsize>,

    /// Show every letter.
    #[arg(long)]
    pub all: bool,
}

/// Print the ranked letter density of a file.
#[instrument(name = "cmd_density", skip_all, fields(file = %args.file))]
pub fn cmd_density(args: DensityArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, top = ?args.top, all = args.all, "executing density command");

    let content = read_input(&args.file, config.input_limit())?;

    let mut session = session_for(config, None, args.top, None);
    if args.all {
        session.toggle_expanded();
    }
    let snapshot = session.set_text(content);

    if global_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&snapshot.visible_density)?
        );
        return Ok(());
    }

    if snapshot.report.density.is_empty() {
        println!("{}", "No letters found.".dimmed());
        return Ok(());
    }

    print_density(&snapshot.visible_density);
    print_hidden_hint(&snapshot);

    Ok(())
}
