//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;
use owo_colors::OwoColorize;
use wordmeter_core::LetterDensity;
use wordmeter_core::session::format_density_entry;

pub mod density;
pub mod info;
pub mod live;
pub mod reading_time;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod stats;

/// Width of a 100% density bar, in terminal cells.
const BAR_WIDTH: usize = 30;

/// Read a file (or standard input for `-`) and validate its size against the
/// configured limit.
pub fn read_input(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == "-" {
        return read_stdin(max_bytes);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    let stdin = std::io::stdin().lock();
    match max_bytes {
        Some(max) => {
            // One byte past the limit is enough to know it was exceeded.
            stdin
                .take(max as u64 + 1)
                .read_to_end(&mut bytes)
                .context("failed to read standard input")?;
            if bytes.len() > max {
                anyhow::bail!("input too large: standard input exceeds {max} bytes");
            }
        }
        None => {
            let mut stdin = stdin;
            stdin
                .read_to_end(&mut bytes)
                .context("failed to read standard input")?;
        }
    }
    String::from_utf8(bytes).context("standard input is not valid UTF-8")
}

/// Print density rows as `letter  bar  count (pct%)`.
pub fn print_density(rows: &[LetterDensity]) {
    for row in rows {
        let cells = ((row.percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
        let bar = "█".repeat(cells.max(1));
        println!(
            "  {}  {:<width$}  {}",
            row.letter.bold(),
            bar.cyan(),
            format_density_entry(row).dimmed(),
            width = BAR_WIDTH,
        );
    }
}
