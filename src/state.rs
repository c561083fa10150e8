// SPDX-FileCopyrightText: 2025 lastfm-titlecase contributors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Editing state behind the options page.
//!
//! [`ConfigState`] keeps a working copy of the configuration next to the
//! last saved snapshot, so the page can tell which sections have unsaved
//! changes.

use tracing::{debug, warn};

use crate::config::Config;
use crate::store::{ConfigStore, StoreError};
use crate::words::{ValidationError, WordKind};

/// A part of the configuration that is tracked for unsaved changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Lowercase,
    Uppercase,
    Capitalized,
    Replacements,
    SentenceCase,
}

impl Section {
    /// Every section, in the order the options page shows them.
    pub const ALL: [Section; 5] = [
        Section::Lowercase,
        Section::Uppercase,
        Section::Capitalized,
        Section::Replacements,
        Section::SentenceCase,
    ];
}

impl From<WordKind> for Section {
    fn from(kind: WordKind) -> Self {
        match kind {
            WordKind::Lowercase => Section::Lowercase,
            WordKind::Uppercase => Section::Uppercase,
            WordKind::Capitalized => Section::Capitalized,
        }
    }
}

/// Working copy of the configuration plus the last persisted snapshot.
#[derive(Debug, Clone)]
pub struct ConfigState {
    working: Config,
    saved: Config,
}

impl ConfigState {
    /// Start editing from a configuration that is known to be persisted.
    pub fn new(config: Config) -> Self {
        Self {
            working: config.clone(),
            saved: config,
        }
    }

    /// Load the persisted configuration from `store`.
    pub fn load(store: &dyn ConfigStore) -> Result<Self, StoreError> {
        let stored = store.load()?;
        Ok(Self::new(Config::from_stored(stored)))
    }

    /// The configuration being edited.
    pub fn config(&self) -> &Config {
        &self.working
    }

    /// The configuration as last saved.
    pub fn saved(&self) -> &Config {
        &self.saved
    }

    /// Whether `section` differs from the saved snapshot.
    pub fn is_dirty(&self, section: Section) -> bool {
        let (w, s) = (&self.working, &self.saved);
        match section {
            Section::Lowercase => w.lowercase_words != s.lowercase_words,
            Section::Uppercase => w.uppercase_words != s.uppercase_words,
            Section::Capitalized => w.capitalized_words != s.capitalized_words,
            Section::Replacements => w.replacements != s.replacements,
            Section::SentenceCase => w.sentence_case != s.sentence_case,
        }
    }

    /// Whether any section has unsaved changes.
    pub fn has_unsaved_changes(&self) -> bool {
        Section::ALL.iter().any(|&section| self.is_dirty(section))
    }

    /// Add a word to one of the sets.  Returns `false` for duplicates.
    pub fn add_word(&mut self, kind: WordKind, word: &str) -> Result<bool, ValidationError> {
        self.working.words_mut(kind).insert(word)
    }

    /// Remove a word from one of the sets.
    pub fn remove_word(&mut self, kind: WordKind, word: &str) -> bool {
        self.working.words_mut(kind).remove(word)
    }

    /// Add a phrase replacement.
    pub fn add_replacement(&mut self, from: &str, to: &str) -> Result<(), ValidationError> {
        self.working.replacements.insert(from, to)
    }

    /// Remove the phrase replacement for `from`.
    pub fn remove_replacement(&mut self, from: &str) -> bool {
        self.working.replacements.remove(from)
    }

    pub fn set_sentence_case(&mut self, enabled: bool) {
        self.working.sentence_case = enabled;
    }

    /// Write the whole working copy to `store`.
    ///
    /// On success the working copy becomes the new snapshot.  On failure the
    /// error is returned and every section stays dirty.
    pub fn save(&mut self, store: &mut dyn ConfigStore) -> Result<(), StoreError> {
        match store.save(&self.working.to_stored()) {
            Ok(()) => {
                debug!("settings saved");
                self.saved = self.working.clone();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "failed to save settings");
                Err(e)
            }
        }
    }

    /// Throw away unsaved edits.
    pub fn discard(&mut self) {
        self.working = self.saved.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoredSettings};

    #[test]
    fn test_new_state_is_clean() {
        let state = ConfigState::new(Config::default());
        assert!(!state.has_unsaved_changes());
    }

    #[test]
    fn test_add_word_marks_only_its_section() {
        let mut state = ConfigState::new(Config::default());
        assert!(state.add_word(WordKind::Uppercase, "abba").unwrap());
        assert!(state.is_dirty(Section::Uppercase));
        assert!(!state.is_dirty(Section::Lowercase));
        assert!(state.has_unsaved_changes());
    }

    #[test]
    fn test_undoing_an_edit_clears_dirty() {
        let mut state = ConfigState::new(Config::default());
        state.add_word(WordKind::Capitalized, "elvis").unwrap();
        assert!(state.remove_word(WordKind::Capitalized, "elvis"));
        assert!(!state.has_unsaved_changes());
    }

    #[test]
    fn test_invalid_word_changes_nothing() {
        let mut state = ConfigState::new(Config::default());
        assert!(state.add_word(WordKind::Lowercase, "<i>").is_err());
        assert!(!state.has_unsaved_changes());
    }

    #[test]
    fn test_replacement_and_flag_sections() {
        let mut state = ConfigState::new(Config::default());
        state.add_replacement("acdc", "AC/DC").unwrap();
        state.set_sentence_case(false);
        assert!(state.is_dirty(Section::Replacements));
        assert!(state.is_dirty(Section::SentenceCase));
        assert!(state.remove_replacement("ACDC"));
        assert!(!state.is_dirty(Section::Replacements));
    }

    #[test]
    fn test_save_writes_everything_and_resets_snapshot() {
        let mut store = MemoryStore::default();
        let mut state = ConfigState::load(&store).unwrap();
        state.add_word(WordKind::Uppercase, "abba").unwrap();
        state.save(&mut store).unwrap();

        assert!(!state.has_unsaved_changes());
        assert_eq!(state.saved(), state.config());
        let reloaded = Config::from_stored(store.settings().clone());
        assert_eq!(&reloaded, state.config());
    }

    #[test]
    fn test_failed_save_keeps_dirty_state() {
        let mut store = MemoryStore::default();
        store.set_fail_saves(true);
        let mut state = ConfigState::new(Config::default());
        state.add_word(WordKind::Uppercase, "abba").unwrap();

        assert!(state.save(&mut store).is_err());
        assert!(state.is_dirty(Section::Uppercase));
        assert_eq!(store.settings(), &StoredSettings::default());
    }

    #[test]
    fn test_discard_reverts_to_snapshot() {
        let mut state = ConfigState::new(Config::default());
        state.set_sentence_case(false);
        state.discard();
        assert!(state.config().sentence_case);
        assert!(!state.has_unsaved_changes());
    }
}
