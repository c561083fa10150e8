// SPDX-FileCopyrightText: 2025 lastfm-titlecase contributors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Roman numeral upper-casing.

use std::sync::LazyLock;

use regex::Regex;

use super::{Fragment, Stage};
use crate::config::Config;

// I through XXXIX.  Only I, V and X: with L, C, D and M in the grammar
// ordinary words such as "mix", "dim" or "civil" would match.
static ROMAN_NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:x{1,3}(?:ix|iv|v?i{0,3})|ix|iv|v?i{1,3}|v)\b").unwrap()
});

/// Upper-cases standalone roman numerals (`Part iii` → `Part III`).
#[derive(Debug, Clone, Copy, Default)]
pub struct RomanNumerals;

impl Stage for RomanNumerals {
    fn name(&self) -> &'static str {
        "roman-numerals"
    }

    fn apply(&self, fragment: &mut Fragment, _config: &Config) {
        fragment.rewrite(&ROMAN_NUMERAL, 0, |caps| Some(caps[0].to_uppercase()));
    }
}
