//! Core library for wordmeter.
//!
//! Pure, stateless text statistics plus the small amount of state a live
//! editor needs around them.
//!
//! # Modules
//!
//! - [`counters`] - Character, word, and sentence counts
//! - [`reading_time`] - Reading-time estimation and formatting
//! - [`density`] - Letter frequency ranking over an explicit alphabet
//! - [`stats`] - All of the above bundled into one report
//! - [`session`] - Editing session that re-analyzes on every change
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use wordmeter_core::{AnalysisInput, AnalysisOptions, analyze};
//!
//! let report = analyze(
//!     &AnalysisInput::new("Short and sweet. Done!"),
//!     &AnalysisOptions::default(),
//! );
//! assert_eq!(report.word_count, 4);
//! assert_eq!(report.sentence_count, 2);
//! assert_eq!(report.reading_time, "1 minute");
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod counters;
pub mod density;
pub mod error;
pub mod reading_time;
pub mod session;
pub mod stats;

pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use counters::{count_characters, count_sentences, count_words};
pub use density::{Alphabet, LetterDensity, letter_density, letter_density_with};
pub use error::{ConfigError, ConfigResult, LimitError};
pub use reading_time::{DEFAULT_WORDS_PER_MINUTE, ReadingTime, estimate_reading_time};
pub use session::{DEFAULT_TOP_K, EditorSession, Snapshot};
pub use stats::{AnalysisInput, AnalysisOptions, StatsReport, analyze};
