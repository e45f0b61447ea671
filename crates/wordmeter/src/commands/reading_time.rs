//! Reading-time command: format a duration for a word count.

use std::num::NonZeroU32;

use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use wordmeter_core::ReadingTime;

/// Arguments for the `reading-time` subcommand.
#[derive(Args, Debug)]
pub struct ReadingTimeArgs {
    /// Number of words.
    pub words: usize,

    /// Reading speed in words per minute.
    #[arg(long, value_name = "N")]
    pub wpm: Option<NonZeroU32>,
}

#[derive(Serialize)]
struct ReadingTimeOutput {
    words: usize,
    words_per_minute: u32,
    minutes: u64,
    reading_time: String,
}

/// Print the estimated reading time for a word count.
#[instrument(name = "cmd_reading_time", skip_all, fields(words = args.words))]
pub fn cmd_reading_time(
    args: ReadingTimeArgs,
    global_json: bool,
    config_wpm: NonZeroU32,
) -> anyhow::Result<()> {
    let wpm = args.wpm.unwrap_or(config_wpm);
    debug!(words = args.words, wpm = wpm.get(), "executing reading-time command");

    let estimate = ReadingTime::from_word_count(args.words, wpm);

    if global_json {
        let output = ReadingTimeOutput {
            words: args.words,
            words_per_minute: wpm.get(),
            minutes: estimate.total_minutes(),
            reading_time: estimate.to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{estimate}");
    }

    Ok(())
}
