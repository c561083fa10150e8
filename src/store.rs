// SPDX-FileCopyrightText: 2025 lastfm-titlecase contributors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Persistent settings store.
//!
//! The extension keeps its settings in a key-value store under the keys
//! `lowercaseWords`, `uppercaseWords`, `capitalizedWords`,
//! `titleReplacements` and `sentenceCaseEnabled`.  Any key may be absent, in
//! which case [`Config::from_stored`](crate::Config::from_stored) falls back
//! to the built-in default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::words::{ReplacementTable, WordSet};

/// Settings exactly as they are kept in the store.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowercase_words: Option<WordSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uppercase_words: Option<WordSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capitalized_words: Option<WordSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_replacements: Option<ReplacementTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentence_case_enabled: Option<bool>,
}

impl StoredSettings {
    /// Parse settings from their JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize settings to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Errors reported by a settings store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error reading or writing the backing file.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored data is not valid settings JSON.
    #[error("invalid settings in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The store refused the write.
    #[error("settings store rejected the write: {0}")]
    Rejected(String),
}

/// A place settings are loaded from and saved to.
pub trait ConfigStore {
    /// Read all settings.  Missing keys are `None`.
    fn load(&self) -> Result<StoredSettings, StoreError>;

    /// Write all settings, replacing what was stored before.
    fn save(&mut self, settings: &StoredSettings) -> Result<(), StoreError>;
}

/// In-memory store, used by tests and by hosts that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    settings: StoredSettings,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn new(settings: StoredSettings) -> Self {
        Self {
            settings,
            fail_saves: false,
        }
    }

    /// Make every following save fail, to exercise error paths.
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// What is currently stored.
    pub fn settings(&self) -> &StoredSettings {
        &self.settings
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self) -> Result<StoredSettings, StoreError> {
        Ok(self.settings.clone())
    }

    fn save(&mut self, settings: &StoredSettings) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::Rejected("memory store is read-only".to_string()));
        }
        self.settings = settings.clone();
        Ok(())
    }
}

/// Store backed by a JSON file.  A missing file reads as empty settings.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for JsonFileStore {
    fn load(&self) -> Result<StoredSettings, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "settings file missing, using defaults");
                return Ok(StoredSettings::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        StoredSettings::from_json(&content).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&mut self, settings: &StoredSettings) -> Result<(), StoreError> {
        let json = settings.to_json().map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(|source| {
            warn!(path = %self.path.display(), error = %source, "failed to save settings");
            StoreError::Io {
                path: self.path.clone(),
                source,
            }
        })
    }
}
