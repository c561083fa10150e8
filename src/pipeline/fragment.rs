// SPDX-FileCopyrightText: 2025 lastfm-titlecase contributors
// SPDX-License-Identifier: GPL-3.0-or-later
//! The text a pipeline transforms, with the byte ranges later stages must
//! leave alone.

use std::ops::Range;

use regex::{Captures, Regex};

/// A replacement of one byte range of a [`Fragment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: Range<usize>,
    pub text: String,
    /// Whether the new text is locked against later edits.
    pub protect: bool,
}

impl Edit {
    pub fn new(range: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
            protect: false,
        }
    }

    /// An edit whose output no later stage may change, such as the target
    /// of a user replacement.
    pub fn protected(range: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
            protect: true,
        }
    }
}

/// A title fragment under transformation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    text: String,
    protected: Vec<Range<usize>>,
}

impl Fragment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            protected: Vec::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Locked byte ranges, in text order.
    pub fn protected(&self) -> &[Range<usize>] {
        &self.protected
    }

    /// Whether `range` overlaps a locked range.
    pub fn is_protected(&self, range: &Range<usize>) -> bool {
        self.protected
            .iter()
            .any(|p| range.start < p.end && p.start < range.end)
    }

    /// Apply edits given in text order.
    ///
    /// Edits that overlap a locked range or an earlier edit are dropped.
    /// Locked ranges move with the text around them.
    pub fn splice<I>(&mut self, edits: I)
    where
        I: IntoIterator<Item = Edit>,
    {
        let mut text = String::with_capacity(self.text.len());
        // (end of the edit in the old text, offset of old positions after it)
        let mut shifts: Vec<(usize, isize)> = Vec::new();
        let mut added = Vec::new();
        let mut last_end = 0;

        for edit in edits {
            if edit.range.start < last_end || self.is_protected(&edit.range) {
                continue;
            }
            text.push_str(&self.text[last_end..edit.range.start]);
            let start = text.len();
            text.push_str(&edit.text);
            if edit.protect {
                added.push(start..text.len());
            }
            last_end = edit.range.end;
            shifts.push((last_end, text.len() as isize - last_end as isize));
        }
        if shifts.is_empty() {
            return;
        }
        text.push_str(&self.text[last_end..]);

        let mut protected: Vec<Range<usize>> = self
            .protected
            .iter()
            .map(|range| {
                let delta = shifts
                    .iter()
                    .take_while(|(end, _)| *end <= range.start)
                    .last()
                    .map_or(0, |(_, delta)| *delta);
                range.start.saturating_add_signed(delta)..range.end.saturating_add_signed(delta)
            })
            .collect();
        protected.extend(added);
        protected.sort_by_key(|range| range.start);

        self.text = text;
        self.protected = protected;
    }

    /// Replace capture group `group` of every match of `regex` with what
    /// `replace` returns.  Matches whose group touches a locked range are
    /// skipped, and so are those for which `replace` returns `None`.
    pub fn rewrite<F>(&mut self, regex: &Regex, group: usize, mut replace: F)
    where
        F: FnMut(&Captures<'_>) -> Option<String>,
    {
        let edits: Vec<Edit> = regex
            .captures_iter(&self.text)
            .filter_map(|caps| {
                let target = caps.get(group)?;
                let range = target.range();
                if self.is_protected(&range) {
                    return None;
                }
                let text = replace(&caps)?;
                (text != target.as_str()).then(|| Edit::new(range, text))
            })
            .collect();
        self.splice(edits);
    }
}
