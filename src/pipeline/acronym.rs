// SPDX-FileCopyrightText: 2025 lastfm-titlecase contributors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Dotted acronyms (`u.s.a.` → `U.S.A.`).

use std::sync::LazyLock;

use regex::Regex;

use super::{Fragment, Stage};
use crate::config::Config;

// The trailing group rejects runs that continue into a word, like `a.b.cd`.
static DOTTED_ACRONYM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b((?:\p{L}\.){2,})(\P{L}|$)").unwrap());

/// Upper-cases runs of two or more single-letter-plus-dot tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct Acronyms;

impl Stage for Acronyms {
    fn name(&self) -> &'static str {
        "acronyms"
    }

    fn apply(&self, fragment: &mut Fragment, _config: &Config) {
        fragment.rewrite(&DOTTED_ACRONYM, 1, |caps| Some(caps[1].to_uppercase()));
    }
}
