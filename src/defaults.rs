// SPDX-FileCopyrightText: 2025 lastfm-titlecase contributors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Built-in word lists used when the settings store has no value.

/// Small words kept lower-case inside a title.
pub const DEFAULT_LOWERCASE: &[&str] = &[
    "a", "aka", "an", "and", "as", "at", "by", "de", "en", "for", "in", "nor", "of", "on", "or",
    "per", "the", "to", "via", "vs",
];

/// Abbreviations that show up in music titles and read wrong when
/// capitalized.
pub const DEFAULT_UPPERCASE: &[&str] = &[
    "dj", "edm", "ep", "lp", "mc", "nyc", "ok", "ost", "tv", "uk", "usa",
];

/// No words are force-capitalized out of the box.
pub const DEFAULT_CAPITALIZED: &[&str] = &[];
