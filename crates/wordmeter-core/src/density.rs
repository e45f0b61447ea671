//! Letter frequency density.
//!
//! Only letters from an explicit [`Alphabet`] are counted. The default
//! alphabet is the 26 ASCII letters plus the accented letters used in
//! French text; it is deliberately not "every Unicode letter".

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// ASCII Latin letters, in alphabetical order.
pub const ASCII_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Accented Latin letters recognized by the default alphabet.
pub const ACCENTED_LETTERS: &str = "àâäéèêëïîôùûüÿæœç";

/// The set of lowercase letters that density analysis considers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// The 26 ASCII letters only.
    pub fn ascii() -> Self {
        Self::from_letters(ASCII_LETTERS)
    }

    /// Build an alphabet from an explicit list of letters.
    ///
    /// Letters are lowercased and deduplicated; whitespace is ignored so
    /// `"a b c"` and `"abc"` are the same alphabet.
    pub fn from_letters(letters: &str) -> Self {
        let mut set = Vec::new();
        for c in letters
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
        {
            if !set.contains(&c) {
                set.push(c);
            }
        }
        Self { letters: set }
    }

    /// Whether `c` (already lowercased) is a recognized letter.
    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&c)
    }

    /// Recognized letters in declaration order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of recognized letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether nothing is recognized.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        let mut alphabet = Self::ascii();
        alphabet.letters.extend(ACCENTED_LETTERS.chars());
        alphabet
    }
}

/// One letter's share of the recognized letters in a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LetterDensity {
    /// The (lowercase) letter.
    pub letter: char,
    /// Occurrences of the letter.
    pub count: usize,
    /// `100 * count / total recognized letters`.
    pub percentage: f64,
}

/// Rank the letters of `text` using the default [`Alphabet`].
pub fn letter_density(text: &str) -> Vec<LetterDensity> {
    letter_density_with(text, &Alphabet::default())
}

/// Rank the letters of `text` that belong to `alphabet`.
///
/// Text is lowercased first. The result covers every distinct recognized
/// letter, sorted by descending count; equal counts keep the order in which
/// the letters first appear. Text with no recognized letters yields an
/// empty list.
pub fn letter_density_with(text: &str, alphabet: &Alphabet) -> Vec<LetterDensity> {
    let mut counts: Vec<(char, usize)> = Vec::new();
    let mut slots: HashMap<char, usize> = HashMap::new();
    let mut total = 0usize;

    for letter in lowercase_letters(text, alphabet) {
        total += 1;
        match slots.entry(letter) {
            Entry::Occupied(slot) => counts[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(counts.len());
                counts.push((letter, 1));
            }
        }
    }

    if total == 0 {
        return Vec::new();
    }

    let total = total as f64;
    let mut density: Vec<LetterDensity> = counts
        .into_iter()
        .map(|(letter, count)| LetterDensity {
            letter,
            count,
            percentage: (count as f64 / total) * 100.0,
        })
        .collect();

    // sort_by is stable: ties stay in first-seen order
    density.sort_by(|a, b| b.count.cmp(&a.count));
    density
}

/// Number of recognized letters in the lowercased `text`.
pub fn recognized_letter_count(text: &str, alphabet: &Alphabet) -> usize {
    lowercase_letters(text, alphabet).count()
}

fn lowercase_letters<'a>(
    text: &'a str,
    alphabet: &'a Alphabet,
) -> impl Iterator<Item = char> + 'a {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(move |c| alphabet.contains(*c))
}
