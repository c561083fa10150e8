// SPDX-FileCopyrightText: 2025 lastfm-titlecase contributors
// SPDX-License-Identifier: GPL-3.0-or-later
//! The rule pipeline.
//!
//! After the baseline casing, a fragment goes through an ordered list of
//! corrective passes.  Each pass is a [`Stage`] that edits a [`Fragment`] and
//! may read the configuration but never changes it.  Text written by a user
//! replacement is locked, so later passes cannot re-case it.  The standard
//! order is:
//!
//! 1. roman numerals ([`RomanNumerals`])
//! 2. word overrides ([`WordOverrides`])
//! 3. acronyms ([`Acronyms`])
//! 4. capitalization after punctuation ([`CapitalizeAfterPunctuation`],
//!    title case only)
//! 5. musical keys ([`MusicalKeys`], title case only)

mod acronym;
mod fragment;
mod musical_key;
mod overrides;
mod punctuation;
mod roman;


use std::sync::LazyLock;

use tracing::trace;

use crate::config::Config;
use crate::script::CaseStyle;

pub use acronym::Acronyms;
pub use fragment::{Edit, Fragment};
pub use musical_key::MusicalKeys;
pub use overrides::WordOverrides;
pub use punctuation::CapitalizeAfterPunctuation;
pub use roman::RomanNumerals;

/// A single corrective pass over a fragment.
pub trait Stage: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Whether this stage runs for fragments of the given style.
    fn applies_to(&self, _style: CaseStyle) -> bool {
        true
    }

    /// Transform the fragment in place.  Must be total: leave the fragment
    /// unchanged rather than fail.
    fn apply(&self, fragment: &mut Fragment, config: &Config);
}

/// An ordered list of stages.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

static STANDARD: LazyLock<Pipeline> = LazyLock::new(Pipeline::build_standard);

impl Pipeline {
    /// Build a pipeline from stages, run in the given order.
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// The standard pipeline, shared by every normalization call.
    pub fn standard() -> &'static Pipeline {
        &STANDARD
    }

    fn build_standard() -> Self {
        Self::new(vec![
            Box::new(RomanNumerals),
            Box::new(WordOverrides),
            Box::new(Acronyms),
            Box::new(CapitalizeAfterPunctuation),
            Box::new(MusicalKeys),
        ])
    }

    /// Names of the stages, in order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage that applies to `style`, feeding each the previous
    /// stage's output.
    pub fn run(&self, text: &str, style: CaseStyle, config: &Config) -> String {
        let mut fragment = Fragment::new(text);
        for stage in &self.stages {
            if !stage.applies_to(style) {
                continue;
            }
            let before = fragment.as_str().to_string();
            stage.apply(&mut fragment, config);
            if fragment.as_str() != before {
                trace!(stage = stage.name(), before = %before, after = %fragment.as_str(), "stage changed text");
            }
        }
        fragment.into_string()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}

/// Upper-case the first character of `run`, keeping the rest as-is.
fn upper_first(run: &str) -> String {
    let mut chars = run.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut result: String = first.to_uppercase().collect();
            result.push_str(chars.as_str());
            result
        }
    }
}
