// SPDX-FileCopyrightText: 2025 lastfm-titlecase contributors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Per-word overrides from the user's configuration.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use super::{Edit, Fragment, Stage};
use crate::casing::capitalize_word;
use crate::config::Config;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").unwrap());

static LETTER_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\p{L}\p{M}]+").unwrap());

const OPENERS: &[char] = &['(', '[', '{', '"', '\'', '\u{201C}', '\u{2018}', '\u{00AB}'];
const CLOSERS: &[char] = &[
    ')', ']', '}', '"', '\'', '\u{201D}', '\u{2019}', '\u{00BB}', ',', ';', ':', '!', '?',
];

/// Applies word-level overrides to every letter run.
///
/// For each run exactly one rule fires, in this order:
///
/// 1. a single-word replacement whose source equals the run,
/// 2. membership in the uppercase set,
/// 3. membership in the capitalized set,
///
/// and otherwise the run is left alone.  Replacements whose source contains
/// non-letters (`feat.`, `ac/dc`) are matched against whole tokens instead,
/// ignoring surrounding brackets, quotes and trailing commas.  Replacement
/// output is locked against the stages that follow.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordOverrides;

impl Stage for WordOverrides {
    fn name(&self) -> &'static str {
        "word-overrides"
    }

    fn apply(&self, fragment: &mut Fragment, config: &Config) {
        let edits: Vec<Edit> = TOKEN
            .find_iter(fragment.as_str())
            .flat_map(|token| token_edits(token.as_str(), token.start(), config))
            .collect();
        fragment.splice(edits);
    }
}

fn token_edits(token: &str, offset: usize, config: &Config) -> Vec<Edit> {
    let core_start = token.len() - token.trim_start_matches(OPENERS).len();
    let core = token[core_start..].trim_end_matches(CLOSERS);
    let core_end = core_start + core.len();

    if core.contains(|c: char| !c.is_alphabetic())
        && let Some(to) = config.replacements.find_word(core)
    {
        return vec![Edit::protected(offset + core_start..offset + core_end, to)];
    }

    LETTER_RUN
        .find_iter(token)
        .filter_map(|run| {
            resolve_run(run.as_str(), offset + run.start()..offset + run.end(), config)
        })
        .collect()
}

fn resolve_run(run: &str, range: Range<usize>, config: &Config) -> Option<Edit> {
    if let Some(to) = config.replacements.find_word(run) {
        Some(Edit::protected(range, to))
    } else if config.uppercase_words.contains(run) {
        Some(Edit::new(range, run.to_uppercase()))
    } else if config.capitalized_words.contains(run) {
        Some(Edit::new(range, capitalize_word(run)))
    } else {
        None
    }
}
