// SPDX-FileCopyrightText: 2025 lastfm-titlecase contributors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Musical key names.

use std::sync::LazyLock;

use regex::Regex;

use super::{Fragment, Stage};
use crate::config::Config;
use crate::script::CaseStyle;

static KEY_OF_A: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(a)((?:\s+(?i:sharp|flat))?\s+(?i:major|minor))\b").unwrap()
});

/// Upper-cases the note `a` in key names (`a minor` → `A minor`,
/// `a flat major` → `A flat major`).
///
/// Without this the small-word rule leaves it looking like the article.
/// Runs only on title-cased fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct MusicalKeys;

impl Stage for MusicalKeys {
    fn name(&self) -> &'static str {
        "musical-keys"
    }

    fn applies_to(&self, style: CaseStyle) -> bool {
        style == CaseStyle::Title
    }

    fn apply(&self, fragment: &mut Fragment, _config: &Config) {
        fragment.rewrite(&KEY_OF_A, 1, |_| Some("A".to_string()));
    }
}
