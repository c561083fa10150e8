// SPDX-FileCopyrightText: 2025 lastfm-titlecase contributors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Word sets and phrase replacements.
//!
//! Both are user-editable lists that the options page maintains.  Every entry
//! passes through [`validate_entry`] before it is stored, so an invalid entry
//! is rejected as a whole and never partially applied.

use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of a word or phrase entry, in characters.
pub const MAX_ENTRY_LENGTH: usize = 50;

static URL_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[a-z][a-z0-9+.\-]*://").unwrap());

static WWW_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bwww\.").unwrap());

static MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<>]+>").unwrap());

/// Reasons an entry is refused by the options page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Nothing left after trimming.
    #[error("entry is empty")]
    Empty,

    /// Longer than [`MAX_ENTRY_LENGTH`] characters.
    #[error("entry {0:?} is longer than {1} characters")]
    TooLong(String, usize),

    /// Contains a URL scheme (`https://`) or a `www.` prefix.
    #[error("entry {0:?} looks like a URL")]
    ContainsUrl(String),

    /// Contains something shaped like an HTML tag.
    #[error("entry {0:?} contains markup")]
    ContainsMarkup(String),

    /// A replacement with the same source text already exists.
    #[error("a replacement for {0:?} already exists")]
    DuplicateReplacement(String),
}

/// Validate a candidate word or phrase and return it trimmed.
///
/// HTML entities are decoded before the markup check, so `&lt;b&gt;` is
/// refused the same way as `<b>`.
pub fn validate_entry(candidate: &str) -> Result<String, ValidationError> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if trimmed.chars().count() > MAX_ENTRY_LENGTH {
        return Err(ValidationError::TooLong(
            trimmed.to_string(),
            MAX_ENTRY_LENGTH,
        ));
    }
    if URL_SCHEME.is_match(trimmed) || WWW_PREFIX.is_match(trimmed) {
        return Err(ValidationError::ContainsUrl(trimmed.to_string()));
    }
    let decoded = html_escape::decode_html_entities(trimmed);
    if MARKUP.is_match(&decoded) {
        return Err(ValidationError::ContainsMarkup(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Which of the three word sets an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordKind {
    /// Small words left lower-case inside a title.
    Lowercase,
    /// Words always rendered upper-case.
    Uppercase,
    /// Words always rendered with a leading capital.
    Capitalized,
}

/// A set of normalized (trimmed, lower-cased) words.
///
/// Insertion order is kept so that serialized settings stay stable between
/// saves.  Membership tests are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WordSet {
    words: IndexSet<String>,
}

impl WordSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw entries, validating each one.
    pub fn from_words<I, S>(words: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for word in words {
            set.insert(word.as_ref())?;
        }
        Ok(set)
    }

    /// Build a set from built-in entries that are already normalized.
    pub(crate) fn from_static(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Add a word.  Returns `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> Result<bool, ValidationError> {
        let normalized = validate_entry(word)?.to_lowercase();
        Ok(self.words.insert(normalized))
    }

    /// Remove a word.  Returns `false` if it was not present.
    pub fn remove(&mut self, word: &str) -> bool {
        self.words.shift_remove(&word.trim().to_lowercase())
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words in alphabetical order, the way the options page lists them.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }
}

impl TryFrom<Vec<String>> for WordSet {
    type Error = ValidationError;

    fn try_from(words: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_words(words)
    }
}

impl From<WordSet> for Vec<String> {
    fn from(set: WordSet) -> Self {
        set.words.into_iter().collect()
    }
}

/// A literal `from` → `to` override that bypasses casing rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseReplacement {
    pub from: String,
    pub to: String,
}

impl PhraseReplacement {
    /// Create a replacement, validating both sides.
    pub fn new(from: &str, to: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            from: validate_entry(from)?,
            to: validate_entry(to)?,
        })
    }

    /// Multi-word replacements only ever match a whole fragment.
    pub fn is_multi_word(&self) -> bool {
        self.from.chars().any(char::is_whitespace)
    }

    fn key(&self) -> String {
        phrase_key(&self.from)
    }
}

/// Lower-cased text with runs of whitespace collapsed to one space.
fn phrase_key(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Ordered list of phrase replacements with unique (case-insensitive)
/// source texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<PhraseReplacement>",
    into = "Vec<PhraseReplacement>"
)]
pub struct ReplacementTable {
    entries: Vec<PhraseReplacement>,
}

impl ReplacementTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a replacement.  Fails without touching the table if either
    /// side is invalid or `from` is already present.
    pub fn insert(&mut self, from: &str, to: &str) -> Result<(), ValidationError> {
        let entry = PhraseReplacement::new(from, to)?;
        let key = entry.key();
        if self.entries.iter().any(|e| e.key() == key) {
            return Err(ValidationError::DuplicateReplacement(entry.from));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Remove the replacement whose source matches `from`.
    pub fn remove(&mut self, from: &str) -> bool {
        let key = phrase_key(from);
        let before = self.entries.len();
        self.entries.retain(|e| e.key() != key);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhraseReplacement> {
        self.entries.iter()
    }

    /// Look up a multi-word replacement for a whole (trimmed) fragment.
    pub fn find_phrase(&self, fragment: &str) -> Option<&str> {
        let key = phrase_key(fragment);
        self.entries
            .iter()
            .find(|e| e.is_multi_word() && e.key() == key)
            .map(|e| e.to.as_str())
    }

    /// Look up a single-word replacement for one token.
    pub fn find_word(&self, word: &str) -> Option<&str> {
        let key = word.to_lowercase();
        self.entries
            .iter()
            .find(|e| !e.is_multi_word() && e.from.to_lowercase() == key)
            .map(|e| e.to.as_str())
    }
}

impl TryFrom<Vec<PhraseReplacement>> for ReplacementTable {
    type Error = ValidationError;

    fn try_from(entries: Vec<PhraseReplacement>) -> Result<Self, Self::Error> {
        let mut table = Self::new();
        for entry in entries {
            table.insert(&entry.from, &entry.to)?;
        }
        Ok(table)
    }
}

impl From<ReplacementTable> for Vec<PhraseReplacement> {
    fn from(table: ReplacementTable) -> Self {
        table.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims() {
        assert_eq!(validate_entry("  feat  ").unwrap(), "feat");
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(validate_entry("   "), Err(ValidationError::Empty));
    }

    #[test]
    fn test_validate_length_counts_characters() {
        let fifty = "й".repeat(50);
        assert!(validate_entry(&fifty).is_ok());
        let fifty_one = "a".repeat(51);
        assert!(matches!(
            validate_entry(&fifty_one),
            Err(ValidationError::TooLong(_, 50))
        ));
    }

    #[test]
    fn test_validate_url() {
        assert!(matches!(
            validate_entry("https://example.com"),
            Err(ValidationError::ContainsUrl(_))
        ));
        assert!(matches!(
            validate_entry("WWW.example.com"),
            Err(ValidationError::ContainsUrl(_))
        ));
        assert!(validate_entry("awww").is_ok());
    }

    #[test]
    fn test_validate_markup() {
        assert!(matches!(
            validate_entry("<b>bold</b>"),
            Err(ValidationError::ContainsMarkup(_))
        ));
        assert!(matches!(
            validate_entry("&lt;script&gt;"),
            Err(ValidationError::ContainsMarkup(_))
        ));
        assert!(validate_entry("<3").is_ok());
    }

    #[test]
    fn test_word_set_normalizes() {
        let mut set = WordSet::new();
        assert!(set.insert("  The ").unwrap());
        assert!(!set.insert("THE").unwrap());
        assert!(set.contains("tHe"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_word_set_rejects_invalid_without_change() {
        let mut set = WordSet::from_words(["of"]).unwrap();
        assert!(set.insert("http://x").is_err());
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["of"]);
    }

    #[test]
    fn test_word_set_remove() {
        let mut set = WordSet::from_words(["of", "the"]).unwrap();
        assert!(set.remove("OF"));
        assert!(!set.remove("of"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["the"]);
    }

    #[test]
    fn test_word_set_sorted() {
        let set = WordSet::from_words(["vs", "and", "of"]).unwrap();
        assert_eq!(set.sorted(), vec!["and", "of", "vs"]);
    }

    #[test]
    fn test_replacement_duplicate_is_case_insensitive() {
        let mut table = ReplacementTable::new();
        table.insert("acdc", "AC/DC").unwrap();
        assert_eq!(
            table.insert("ACDC", "Acdc"),
            Err(ValidationError::DuplicateReplacement("ACDC".to_string()))
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_replacement_find_phrase_only_multi_word() {
        let mut table = ReplacementTable::new();
        table.insert("foo bar", "Foo Bar").unwrap();
        table.insert("baz", "BaZ").unwrap();
        assert_eq!(table.find_phrase("FOO   BAR"), Some("Foo Bar"));
        assert_eq!(table.find_phrase("baz"), None);
    }

    #[test]
    fn test_replacement_find_word_only_single_word() {
        let mut table = ReplacementTable::new();
        table.insert("foo bar", "Foo Bar").unwrap();
        table.insert("baz", "BaZ").unwrap();
        assert_eq!(table.find_word("BAZ"), Some("BaZ"));
        assert_eq!(table.find_word("foo"), None);
    }

    #[test]
    fn test_replacement_remove() {
        let mut table = ReplacementTable::new();
        table.insert("foo bar", "Foo Bar").unwrap();
        assert!(table.remove("Foo  Bar"));
        assert!(table.is_empty());
    }
}
