//! lastfm-titlecase normalizes scraped song, album and artist titles into a
//! canonical casing.
//!
//! Latin-script titles get Title Case with configurable small-word
//! exceptions; Cyrillic and Central European titles get Sentence case.  On top
//! of that, user overrides (forced-uppercase words, forced-capitalized words
//! and literal replacements) and a few music-specific corrections (roman
//! numerals, dotted acronyms, key names such as "A minor") are applied.
//!
//! # Example
//!
//! ```
//! use lastfm_titlecase::{normalize, Config};
//!
//! let config = Config::default();
//! assert_eq!(
//!     normalize("the dark side of the moon", &config),
//!     "The Dark Side of the Moon"
//! );
//! ```
//!
//! Normalization is a pure function of the text and the configuration.  It
//! is not meant to be applied to its own output: always pass the original
//! text of a title (see [`host::TitleTracker`]).

pub mod casing;
pub mod config;
pub mod defaults;
pub mod host;
pub mod pipeline;
pub mod script;
pub mod state;
pub mod store;
pub mod words;

#[cfg(feature = "wasm")]
pub mod wasm;

use rayon::prelude::*;
use tracing::debug;

pub use config::{Config, ConfigError};
pub use pipeline::{Edit, Fragment, Pipeline, Stage};
pub use script::{CaseStyle, classify};
pub use store::{ConfigStore, StoreError, StoredSettings};
pub use words::{PhraseReplacement, ReplacementTable, ValidationError, WordKind, WordSet};

/// Normalizes titles with a fixed configuration and pipeline.
#[derive(Debug)]
pub struct Normalizer<'p> {
    config: Config,
    pipeline: &'p Pipeline,
}

impl Normalizer<'static> {
    /// A normalizer using the standard pipeline.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pipeline: Pipeline::standard(),
        }
    }
}

impl<'p> Normalizer<'p> {
    /// A normalizer using a custom pipeline, e.g. to try a different stage
    /// order.
    pub fn with_pipeline(config: Config, pipeline: &'p Pipeline) -> Self {
        Self { config, pipeline }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Normalize one title.  See [`normalize`].
    pub fn normalize(&self, text: &str) -> String {
        run(text, &self.config, self.pipeline)
    }

    /// Normalize one title, returning `None` when nothing would change.
    pub fn normalize_changed(&self, text: &str) -> Option<String> {
        let normalized = self.normalize(text);
        (normalized != text.trim()).then_some(normalized)
    }

    /// Normalize many titles in parallel, keeping their order.
    pub fn normalize_all<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|t| self.normalize(t.as_ref())).collect()
    }
}

/// Normalize one title with the standard pipeline.
///
/// The input is trimmed.  A multi-word replacement matching the whole title
/// wins outright; otherwise the title is classified, cased and run through
/// the pipeline.
pub fn normalize(text: &str, config: &Config) -> String {
    run(text, config, Pipeline::standard())
}

/// Like [`normalize`], but returns `None` when the title is already in its
/// normalized form and the caller need not write anything.
pub fn normalize_changed(text: &str, config: &Config) -> Option<String> {
    let normalized = normalize(text, config);
    (normalized != text.trim()).then_some(normalized)
}

/// Normalize many titles in parallel with the standard pipeline.
pub fn normalize_all<S>(texts: &[S], config: &Config) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    texts.par_iter().map(|t| normalize(t.as_ref(), config)).collect()
}

fn run(text: &str, config: &Config, pipeline: &Pipeline) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if let Some(replacement) = config.replacements.find_phrase(trimmed) {
        debug!(from = trimmed, to = replacement, "phrase replacement");
        return replacement.to_string();
    }

    let style = if config.sentence_case {
        classify(trimmed)
    } else {
        CaseStyle::Title
    };
    debug!(?style, text = trimmed, "classified");
    let cased = match style {
        CaseStyle::Sentence => casing::to_sentence_case(trimmed),
        CaseStyle::Title => casing::to_title_case(trimmed, &config.lowercase_words),
    };
    pipeline.run(&cased, style, config)
}
