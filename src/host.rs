// SPDX-FileCopyrightText: 2025 lastfm-titlecase contributors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Helpers for the page host that feeds titles to the normalizer.
//!
//! The host reads title elements, asks for their normalized text and writes
//! it back.  Two rules keep that loop safe:
//!
//! - The normalizer always receives an element's *original* text, never text
//!   it already produced.  [`TitleTracker`] remembers the original per
//!   element.
//! - Only element insertions trigger normalization.  A text change is
//!   usually the host's own write and is ignored, so a write can never
//!   re-trigger itself.

use std::hash::Hash;

use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::Config;

/// Something that happened on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent<K> {
    /// A title element was added, with its current text.
    Inserted { key: K, text: String },
    /// The text of an existing element changed.
    TextChanged { key: K },
}

/// Tracks the original text of every title element seen on a page.
///
/// A tracker can only be built from a loaded [`Config`], so nothing is
/// normalized before settings are available.  The configuration is fixed
/// for the tracker's lifetime.
#[derive(Debug)]
pub struct TitleTracker<K> {
    config: Config,
    originals: IndexMap<K, String>,
}

impl<K> TitleTracker<K>
where
    K: Eq + Hash + Clone + Send + Sync,
{
    pub fn new(config: Config) -> Self {
        Self {
            config,
            originals: IndexMap::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The original text recorded for `key`.
    pub fn original(&self, key: &K) -> Option<&str> {
        self.originals.get(key).map(String::as_str)
    }

    /// Number of elements seen so far.
    pub fn len(&self) -> usize {
        self.originals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.originals.is_empty()
    }

    /// Normalize every element found by the initial page scan.
    ///
    /// Returns `(key, text)` for the elements whose text should be replaced,
    /// in input order.
    pub fn bulk_scan<I>(&mut self, elements: I) -> Vec<(K, String)>
    where
        I: IntoIterator<Item = (K, String)>,
    {
        let batch: Vec<(K, String, String)> = elements
            .into_iter()
            .map(|(key, current)| {
                let original = self.remember(&key, &current).to_string();
                (key, original, current)
            })
            .collect();
        debug!(elements = batch.len(), "bulk scan");

        let config = &self.config;
        batch
            .into_par_iter()
            .filter_map(|(key, original, current)| {
                rewrite(&original, &current, config).map(|text| (key, text))
            })
            .collect()
    }

    /// React to a page event.  Returns the text to write, if any.
    pub fn handle(&mut self, event: PageEvent<K>) -> Option<(K, String)> {
        match event {
            PageEvent::Inserted { key, text } => {
                let original = self.remember(&key, &text).to_string();
                rewrite(&original, &text, &self.config).map(|new_text| (key, new_text))
            }
            PageEvent::TextChanged { .. } => {
                trace!("ignoring text change event");
                None
            }
        }
    }

    /// Record the original text for `key` and return it.
    ///
    /// A key seen again keeps its original while the element shows that
    /// original or its normalized form.  Any other text means the host reused
    /// the key for a new title, which becomes the new original.
    fn remember(&mut self, key: &K, current: &str) -> &str {
        let current = current.trim();
        let config = &self.config;
        let original = self
            .originals
            .entry(key.clone())
            .or_insert_with(|| current.to_string());
        if original.as_str() != current && crate::normalize(original, config) != current {
            debug!(from = %original, to = current, "element reused for a new title");
            *original = current.to_string();
        }
        original
    }
}

/// Normalize `original` and return it if it differs from what the element
/// shows now.
fn rewrite(original: &str, current: &str, config: &Config) -> Option<String> {
    let normalized = crate::normalize(original, config);
    (normalized != current.trim()).then_some(normalized)
}

/// The text of the title that was last right-clicked.
///
/// Updated on every context-menu open over a title, and read once by the
/// flow that opens the options page to prefill a new replacement.
#[derive(Debug, Clone, Default)]
pub struct ContextMenuSlot {
    last: Option<String>,
}

impl ContextMenuSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the text under the pointer, replacing any previous value.
    pub fn record(&mut self, text: &str) {
        let text = text.trim();
        self.last = (!text.is_empty()).then(|| text.to_string());
    }

    /// Look at the recorded text without consuming it.
    pub fn peek(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Take the recorded text, leaving the slot empty.
    pub fn take(&mut self) -> Option<String> {
        self.last.take()
    }
}
