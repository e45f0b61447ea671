//! Character, word, and sentence counters.
//!
//! Characters are counted as extended grapheme clusters, so a letter
//! followed by a combining accent, or a flag emoji, counts once.
//! Whitespace means Unicode `White_Space` everywhere in this module.

use regex::Regex;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

/// A run of one or more sentence terminators.
static TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Count characters in `text`.
///
/// With `exclude_spaces`, every whitespace character (spaces, tabs,
/// newlines, and other Unicode whitespace) is removed before counting.
pub fn count_characters(text: &str, exclude_spaces: bool) -> usize {
    if exclude_spaces {
        let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        stripped.graphemes(true).count()
    } else {
        text.graphemes(true).count()
    }
}

/// Count words: maximal runs of non-whitespace characters.
///
/// Punctuation is not stripped, so a lone `-` between spaces is a word.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count sentences by splitting on runs of `.`, `!` and `?`.
///
/// Fragments that are blank after trimming are dropped. Text without any
/// terminator is a single sentence, and `"Wait..."` is one sentence, not three.
pub fn count_sentences(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }

    TERMINATORS
        .split(text)
        .filter(|fragment| !fragment.trim().is_empty())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_empty() {
        assert_eq!(count_characters("", false), 0);
        assert_eq!(count_characters("", true), 0);
    }

    #[test]
    fn characters_excluding_spaces() {
        assert_eq!(count_characters("a b", true), 2);
        assert_eq!(count_characters("a b", false), 3);
    }

    #[test]
    fn characters_excluding_all_whitespace_kinds() {
        let text = "a\tb\nc\u{00A0}d\u{2003}e";
        assert_eq!(count_characters(text, true), 5);
        assert_eq!(count_characters(text, false), 9);
    }

    #[test]
    fn characters_count_graphemes() {
        // "e" + combining acute accent renders as one character
        assert_eq!(count_characters("e\u{0301}", false), 1);
        assert_eq!(count_characters("café", false), 4);
        // Regional indicator pair (French flag)
        assert_eq!(count_characters("\u{1F1EB}\u{1F1F7}", false), 1);
    }

    #[test]
    fn words_empty_and_blank() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("\n\t "), 0);
    }

    #[test]
    fn words_collapse_whitespace_runs() {
        assert_eq!(count_words("a  b   c"), 3);
        assert_eq!(count_words("  leading and trailing  "), 3);
        assert_eq!(count_words("line\nbreak\ttab"), 3);
    }

    #[test]
    fn lone_punctuation_is_a_word() {
        assert_eq!(count_words("yes - no"), 3);
    }

    #[test]
    fn sentences_empty() {
        assert_eq!(count_sentences(""), 0);
        assert_eq!(count_sentences("  \n "), 0);
    }

    #[test]
    fn unterminated_text_is_one_sentence() {
        assert_eq!(count_sentences("Hello world"), 1);
        assert_eq!(count_sentences("word"), 1);
    }

    #[test]
    fn sentences_mixed_terminators() {
        assert_eq!(count_sentences("A. B! C?"), 3);
    }

    #[test]
    fn consecutive_terminators_are_one_boundary() {
        assert_eq!(count_sentences("Wait... What?! Really."), 3);
    }

    #[test]
    fn punctuation_only_text_has_no_sentences() {
        assert_eq!(count_sentences("...!?"), 0);
        assert_eq!(count_sentences(" . . "), 0);
    }

    #[test]
    fn trailing_fragment_counts() {
        assert_eq!(count_sentences("First. Second"), 2);
    }

    #[test]
    fn counters_are_repeatable() {
        let text = "Same input. Same output!";
        assert_eq!(count_characters(text, true), count_characters(text, true));
        assert_eq!(count_words(text), count_words(text));
        assert_eq!(count_sentences(text), count_sentences(text));
    }
}
