// SPDX-FileCopyrightText: 2025 lastfm-titlecase contributors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Capitalization after punctuation.

use std::sync::LazyLock;

use regex::Regex;

use super::{Fragment, Stage, upper_first};
use crate::config::Config;
use crate::script::CaseStyle;

// A period followed by whitespace, an opening bracket or quote, a hyphen, a
// slash or an equals sign, then a lower-case letter run.
static AFTER_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\.\s+|[(\[{"\u{201C}\u{2018}\u{00AB}\u{201E}\-/=])(\p{Ll}[\p{L}\p{M}]*)"#)
        .unwrap()
});

// A straight single quote opens a quotation only at the start or after
// whitespace or a bracket; elsewhere it is an apostrophe (`don't`).
static AFTER_SINGLE_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[\s(\[{])(')(\p{Ll}[\p{L}\p{M}]*)").unwrap());

/// Forces a capital on the first letter after sentence punctuation and
/// opening brackets, overriding small-word exemptions
/// (`Live (in the Studio)` → `Live (In the Studio)`).
///
/// Runs only on title-cased fragments.  Replacement output is left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapitalizeAfterPunctuation;

impl Stage for CapitalizeAfterPunctuation {
    fn name(&self) -> &'static str {
        "capitalize-after-punctuation"
    }

    fn applies_to(&self, style: CaseStyle) -> bool {
        style == CaseStyle::Title
    }

    fn apply(&self, fragment: &mut Fragment, _config: &Config) {
        fragment.rewrite(&AFTER_PUNCTUATION, 2, |caps| Some(upper_first(&caps[2])));
        fragment.rewrite(&AFTER_SINGLE_QUOTE, 3, |caps| Some(upper_first(&caps[3])));
    }
}
