//! Stateful editing session.
//!
//! [`EditorSession`] owns everything a live text widget needs to remember
//! between keystrokes: the text, the "exclude spaces" toggle, whether the
//! density list is expanded, and an optional character limit. Every change
//! re-runs [`analyze`] over the whole text and returns a fresh [`Snapshot`]
//! for the renderer. Timers, animation, and persistence belong to the
//! renderer, not to this type.

use std::num::NonZeroUsize;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::density::LetterDensity;
use crate::error::LimitError;
use crate::stats::{AnalysisInput, AnalysisOptions, StatsReport, analyze};

/// Density rows shown before the list is expanded.
pub const DEFAULT_TOP_K: usize = 5;

/// Text a fresh widget starts with.
pub const SAMPLE_TEXT: &str = "Design is the silent ambassador of your brand. \
Simplicity is key to effective communication, creating clarity in every interaction. \
A great design transforms complex ideas into elegant solutions, making them easy to understand. \
It blends aesthetics and functionality seamlessly.";

/// What a renderer needs to draw after a change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Snapshot {
    /// Statistics for the current text.
    pub report: StatsReport,
    /// Density rows to display: the top entries, or all of them when expanded.
    pub visible_density: Vec<LetterDensity>,
    /// Whether there are more rows than the collapsed view shows.
    pub has_more: bool,
    /// Whether the density list is expanded.
    pub expanded: bool,
    /// Active character limit, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_limit: Option<usize>,
}

/// Mutable display state around the pure analysis functions.
#[derive(Debug, Clone)]
pub struct EditorSession {
    text: String,
    exclude_spaces: bool,
    expanded: bool,
    char_limit: Option<NonZeroUsize>,
    top_k: usize,
    options: AnalysisOptions,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(AnalysisOptions::default(), DEFAULT_TOP_K)
    }
}

impl EditorSession {
    /// Start an empty session.
    pub const fn new(options: AnalysisOptions, top_k: usize) -> Self {
        Self {
            text: String::new(),
            exclude_spaces: false,
            expanded: false,
            char_limit: None,
            top_k,
            options,
        }
    }

    /// Seed the session with [`SAMPLE_TEXT`].
    #[must_use]
    pub fn with_sample_text(mut self) -> Self {
        self.text = SAMPLE_TEXT.to_string();
        self.enforce_limit();
        self
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether whitespace is left out of the character count.
    pub const fn excludes_spaces(&self) -> bool {
        self.exclude_spaces
    }

    /// Whether the density list is expanded.
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Active character limit.
    pub const fn char_limit(&self) -> Option<NonZeroUsize> {
        self.char_limit
    }

    /// Replace the whole text.
    pub fn set_text(&mut self, text: impl Into<String>) -> Snapshot {
        self.text = text.into();
        self.enforce_limit();
        self.snapshot()
    }

    /// Append to the text, as typing at the end does.
    pub fn push_str(&mut self, addition: &str) -> Snapshot {
        self.text.push_str(addition);
        self.enforce_limit();
        self.snapshot()
    }

    /// Empty the text.
    pub fn clear(&mut self) -> Snapshot {
        self.text.clear();
        self.snapshot()
    }

    /// Toggle the "exclude spaces" option.
    pub fn set_exclude_spaces(&mut self, exclude: bool) -> Snapshot {
        self.exclude_spaces = exclude;
        self.snapshot()
    }

    /// Flip between the top entries and the full density list.
    pub fn toggle_expanded(&mut self) -> Snapshot {
        self.expanded = !self.expanded;
        self.snapshot()
    }

    /// Set or remove the character limit.
    ///
    /// Text already longer than a new limit is cut down to it.
    pub fn set_char_limit(&mut self, limit: Option<NonZeroUsize>) -> Snapshot {
        self.char_limit = limit;
        self.enforce_limit();
        self.snapshot()
    }

    /// Analyze the current state.
    pub fn snapshot(&self) -> Snapshot {
        let input = AnalysisInput::new(&self.text).exclude_spaces(self.exclude_spaces);
        let report = analyze(&input, &self.options);

        let has_more = report.density.len() > self.top_k;
        let visible_density = if self.expanded {
            report.density.clone()
        } else {
            report.density.iter().take(self.top_k).cloned().collect()
        };

        Snapshot {
            report,
            visible_density,
            has_more,
            expanded: self.expanded,
            char_limit: self.char_limit.map(NonZeroUsize::get),
        }
    }

    fn enforce_limit(&mut self) {
        let Some(limit) = self.char_limit else {
            return;
        };
        if let Some((cut, _)) = self.text.grapheme_indices(true).nth(limit.get()) {
            tracing::debug!(limit = limit.get(), "text truncated to character limit");
            self.text.truncate(cut);
        }
    }
}

/// Parse a user-entered character limit.
pub fn parse_char_limit(input: &str) -> Result<NonZeroUsize, LimitError> {
    let trimmed = input.trim();
    let value: usize = trimmed
        .parse()
        .map_err(|_| LimitError::NotANumber(trimmed.to_string()))?;
    NonZeroUsize::new(value).ok_or(LimitError::Zero)
}

/// Render a density row's figures, e.g. `"12 (8.57%)"`.
pub fn format_density_entry(entry: &LetterDensity) -> String {
    format!("{} ({:.2}%)", entry.count, entry.percentage)
}
