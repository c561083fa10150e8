// SPDX-FileCopyrightText: 2025 lastfm-titlecase contributors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Baseline title case and sentence case conversion.
//!
//! These produce the starting point that the rule pipeline then corrects;
//! neither looks at the uppercase/capitalized word sets or replacements.

use std::sync::LazyLock;

use regex::Regex;

use crate::words::WordSet;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").unwrap());

/// Convert text to sentence case.
///
/// The first letter of the whole fragment is upper-cased and everything
/// else is lower-cased.
pub fn to_sentence_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut seen_letter = false;
    for ch in text.chars() {
        if !seen_letter && ch.is_alphabetic() {
            result.extend(ch.to_uppercase());
            seen_letter = true;
        } else {
            result.extend(ch.to_lowercase());
        }
    }
    result
}

/// Convert text to title case.
///
/// Every whitespace-separated word is capitalized, except interior words
/// found in `small_words`, which are lower-cased.  The first and last words
/// are always capitalized.  Whitespace between words is kept as-is.
pub fn to_title_case(text: &str, small_words: &WordSet) -> String {
    let words: Vec<_> = WORD.find_iter(text).collect();
    let last_index = words.len().saturating_sub(1);

    let mut result = String::with_capacity(text.len());
    let mut last_end = 0;
    for (index, word) in words.iter().enumerate() {
        result.push_str(&text[last_end..word.start()]);
        let is_edge = index == 0 || index == last_index;
        if !is_edge && small_words.contains(word_core(word.as_str())) {
            result.push_str(&word.as_str().to_lowercase());
        } else {
            result.push_str(&capitalize_word(word.as_str()));
        }
        last_end = word.end();
    }
    result.push_str(&text[last_end..]);
    result
}

/// Upper-case the first letter of a word and lower-case the rest.
///
/// Leading punctuation is skipped (`(the` → `(The`), but a word that starts
/// with a digit gets no capital (`12th` stays `12th`).
pub fn capitalize_word(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut done = false;
    for ch in word.chars() {
        if !done && ch.is_alphanumeric() {
            done = true;
            if ch.is_alphabetic() {
                result.extend(ch.to_uppercase());
                continue;
            }
        }
        result.extend(ch.to_lowercase());
    }
    result
}

/// The word with surrounding punctuation removed (`"of,"` → `"of"`).
fn word_core(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}
