// SPDX-FileCopyrightText: 2025 lastfm-titlecase contributors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Configuration for the title normalizer.
//!
//! A [`Config`] is the only input the engine needs besides the raw text.  It
//! can come from a `.lastfm-titlecase.toml` file (for the command-line tool)
//! or from the extension's settings store (see [`crate::store`]); in both
//! cases absent keys fall back to the built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::defaults::{DEFAULT_CAPITALIZED, DEFAULT_LOWERCASE, DEFAULT_UPPERCASE};
use crate::store::StoredSettings;
use crate::words::{ReplacementTable, WordKind, WordSet};

/// The default configuration file name.
pub const CONFIG_FILE_NAME: &str = ".lastfm-titlecase.toml";

/// Configuration for the title normalizer.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Small words skipped by title case (default: English articles,
    /// conjunctions and short prepositions).
    pub lowercase_words: WordSet,

    /// Words always rendered upper-case.
    pub uppercase_words: WordSet,

    /// Words always rendered with a leading capital.
    pub capitalized_words: WordSet,

    /// Literal replacements, applied before any casing rule.
    pub replacements: ReplacementTable,

    /// Use sentence case for Cyrillic and Central European text
    /// (default: true).  When disabled, everything is title-cased.
    pub sentence_case: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lowercase_words: WordSet::from_static(DEFAULT_LOWERCASE),
            uppercase_words: WordSet::from_static(DEFAULT_UPPERCASE),
            capitalized_words: WordSet::from_static(DEFAULT_CAPITALIZED),
            replacements: ReplacementTable::new(),
            sentence_case: true,
        }
    }
}

impl Config {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Discover and load configuration by searching up the directory tree.
    ///
    /// Starting from `start_dir`, searches for `.lastfm-titlecase.toml` in
    /// each parent directory until the filesystem root is reached.  Returns
    /// `None` if no configuration file is found.
    pub fn discover(start_dir: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let mut current = start_dir.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                debug!(path = %config_path.display(), "found configuration file");
                let config = Self::from_file(&config_path)?;
                return Ok(Some((config_path, config)));
            }
            if !current.pop() {
                break;
            }
        }
        debug!(start = %start_dir.display(), "no configuration file found");
        Ok(None)
    }

    /// Merge settings read from the store onto the built-in defaults.
    pub fn from_stored(stored: StoredSettings) -> Self {
        let defaults = Self::default();
        Self {
            lowercase_words: stored.lowercase_words.unwrap_or(defaults.lowercase_words),
            uppercase_words: stored.uppercase_words.unwrap_or(defaults.uppercase_words),
            capitalized_words: stored
                .capitalized_words
                .unwrap_or(defaults.capitalized_words),
            replacements: stored.title_replacements.unwrap_or(defaults.replacements),
            sentence_case: stored.sentence_case_enabled.unwrap_or(defaults.sentence_case),
        }
    }

    /// Full snapshot in the store's schema.
    pub fn to_stored(&self) -> StoredSettings {
        StoredSettings {
            lowercase_words: Some(self.lowercase_words.clone()),
            uppercase_words: Some(self.uppercase_words.clone()),
            capitalized_words: Some(self.capitalized_words.clone()),
            title_replacements: Some(self.replacements.clone()),
            sentence_case_enabled: Some(self.sentence_case),
        }
    }

    /// The word set selected by `kind`.
    pub fn words(&self, kind: WordKind) -> &WordSet {
        match kind {
            WordKind::Lowercase => &self.lowercase_words,
            WordKind::Uppercase => &self.uppercase_words,
            WordKind::Capitalized => &self.capitalized_words,
        }
    }

    /// Mutable access to the word set selected by `kind`.
    pub fn words_mut(&mut self, kind: WordKind) -> &mut WordSet {
        match kind {
            WordKind::Lowercase => &mut self.lowercase_words,
            WordKind::Uppercase => &mut self.uppercase_words,
            WordKind::Capitalized => &mut self.capitalized_words,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading the configuration file.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing the TOML configuration.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
