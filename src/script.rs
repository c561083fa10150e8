// SPDX-FileCopyrightText: 2025 lastfm-titlecase contributors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Script classification.

/// The casing style a fragment should receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStyle {
    /// Capitalize the fragment's first letter only.
    Sentence,
    /// Capitalize every major word.
    Title,
}

/// Decide the casing style for a fragment.
///
/// Any Cyrillic letter, or any of the Central European and Baltic letters in
/// [`is_sentence_case_letter`], makes the whole fragment sentence case, even
/// when it also contains plain ASCII words.
pub fn classify(text: &str) -> CaseStyle {
    if text.chars().any(is_sentence_case_letter) {
        CaseStyle::Sentence
    } else {
        CaseStyle::Title
    }
}

/// Characters whose presence marks a fragment as a sentence-case script.
///
/// Western European accents (é, ñ, ü, …) are deliberately absent: French,
/// Spanish and German titles are still title-cased.
pub fn is_sentence_case_letter(ch: char) -> bool {
    matches!(ch, '\u{0400}'..='\u{04FF}')
        || matches!(
            ch,
            'ą' | 'Ą'
                | 'ć'
                | 'Ć'
                | 'č'
                | 'Č'
                | 'ď'
                | 'Ď'
                | 'ę'
                | 'Ę'
                | 'ě'
                | 'Ě'
                | 'ė'
                | 'Ė'
                | 'ğ'
                | 'Ğ'
                | 'ı'
                | 'İ'
                | 'ł'
                | 'Ł'
                | 'ľ'
                | 'Ľ'
                | 'ĺ'
                | 'Ĺ'
                | 'ń'
                | 'Ń'
                | 'ň'
                | 'Ň'
                | 'ő'
                | 'Ő'
                | 'ř'
                | 'Ř'
                | 'ŕ'
                | 'Ŕ'
                | 'ś'
                | 'Ś'
                | 'š'
                | 'Š'
                | 'ş'
                | 'Ş'
                | 'ť'
                | 'Ť'
                | 'ů'
                | 'Ů'
                | 'ű'
                | 'Ű'
                | 'ų'
                | 'Ų'
                | 'ū'
                | 'Ū'
                | 'ź'
                | 'Ź'
                | 'ż'
                | 'Ż'
                | 'ž'
                | 'Ž'
        )
}
