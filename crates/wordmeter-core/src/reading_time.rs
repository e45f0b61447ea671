//! Reading-time estimation.
//!
//! Minutes are rounded up, so a single word still takes "1 minute".
//! Durations of an hour or more switch to hour notation:
//!
//! | minutes | rendered      |
//! |---------|---------------|
//! | 0       | `0 minute`    |
//! | 1       | `1 minute`    |
//! | 2–59    | `N minutes`   |
//! | 60      | `1 hour`      |
//! | 120     | `2 hours`     |
//! | 61      | `1h 1min`     |

use std::fmt;
use std::num::NonZeroU32;

/// Average adult silent-reading speed.
pub const DEFAULT_WORDS_PER_MINUTE: NonZeroU32 = NonZeroU32::new(200).unwrap();

/// An estimated reading duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingTime {
    /// Under an hour.
    Minutes(u64),
    /// A whole number of hours.
    Hours(u64),
    /// Hours plus a remainder of minutes.
    HoursMinutes {
        /// Whole hours.
        hours: u64,
        /// Remaining minutes (1–59).
        minutes: u64,
    },
}

impl ReadingTime {
    /// Estimate the time needed to read `word_count` words.
    pub fn from_word_count(word_count: usize, words_per_minute: NonZeroU32) -> Self {
        let minutes = (word_count as u64).div_ceil(u64::from(words_per_minute.get()));
        Self::from_minutes(minutes)
    }

    /// Bucket a total number of minutes.
    pub const fn from_minutes(minutes: u64) -> Self {
        if minutes < 60 {
            return Self::Minutes(minutes);
        }
        let hours = minutes / 60;
        let remainder = minutes % 60;
        if remainder == 0 {
            Self::Hours(hours)
        } else {
            Self::HoursMinutes {
                hours,
                minutes: remainder,
            }
        }
    }

    /// Total duration in minutes.
    pub const fn total_minutes(&self) -> u64 {
        match *self {
            Self::Minutes(m) => m,
            Self::Hours(h) => h * 60,
            Self::HoursMinutes { hours, minutes } => hours * 60 + minutes,
        }
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            // "0 minute" is singular on purpose; it matches the display it replaces.
            Self::Minutes(m @ (0 | 1)) => write!(f, "{m} minute"),
            Self::Minutes(m) => write!(f, "{m} minutes"),
            Self::Hours(1) => f.write_str("1 hour"),
            Self::Hours(h) => write!(f, "{h} hours"),
            Self::HoursMinutes { hours, minutes } => write!(f, "{hours}h {minutes}min"),
        }
    }
}

/// Format the estimated reading time for `word_count` words.
pub fn estimate_reading_time(word_count: usize, words_per_minute: NonZeroU32) -> String {
    ReadingTime::from_word_count(word_count, words_per_minute).to_string()
}
