//! WebAssembly bindings for lastfm-titlecase.
//!
//! The browser extension's content script loads settings from its storage
//! area, constructs a [`TitleNormalizer`] once per page and then calls
//! `normalize` with each title element's original text.

use wasm_bindgen::prelude::*;

use crate::config::Config;
use crate::host::ContextMenuSlot;
use crate::store::StoredSettings;

/// Parse a settings object in the store's schema (camelCase keys, every key
/// optional).
fn settings_from_js(settings: JsValue) -> Result<StoredSettings, JsError> {
    if settings.is_undefined() || settings.is_null() {
        Ok(StoredSettings::default())
    } else {
        serde_wasm_bindgen::from_value(settings).map_err(|e| JsError::new(&e.to_string()))
    }
}

/// A normalizer bound to one page's settings.
#[wasm_bindgen]
pub struct TitleNormalizer {
    config: Config,
}

#[wasm_bindgen]
impl TitleNormalizer {
    /// Create a normalizer from the stored settings object.  Missing keys
    /// use the built-in defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(settings: JsValue) -> Result<TitleNormalizer, JsError> {
        let stored = settings_from_js(settings)?;
        Ok(TitleNormalizer {
            config: Config::from_stored(stored),
        })
    }

    /// Normalize a title.  Returns `undefined` when the title is already
    /// normalized.
    pub fn normalize(&self, text: &str) -> Option<String> {
        crate::normalize_changed(text, &self.config)
    }

    /// The effective settings, with defaults filled in.
    #[wasm_bindgen(js_name = effectiveSettings)]
    pub fn effective_settings(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.config.to_stored())
            .map_err(|e| JsError::new(&e.to_string()))
    }
}

/// Validate a word or phrase before it is added in the options page.
///
/// Returns the trimmed entry, or throws with a message for the user.
#[wasm_bindgen(js_name = validateEntry)]
pub fn validate_entry(candidate: &str) -> Result<String, JsError> {
    crate::words::validate_entry(candidate).map_err(|e| JsError::new(&e.to_string()))
}

/// The background script's record of the last right-clicked title.
#[wasm_bindgen]
#[derive(Default)]
pub struct LastRightClicked {
    slot: ContextMenuSlot,
}

#[wasm_bindgen]
impl LastRightClicked {
    #[wasm_bindgen(constructor)]
    pub fn new() -> LastRightClicked {
        LastRightClicked::default()
    }

    pub fn record(&mut self, text: &str) {
        self.slot.record(text);
    }

    pub fn take(&mut self) -> Option<String> {
        self.slot.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_entry_trims() {
        assert_eq!(validate_entry(" feat ").ok(), Some("feat".to_string()));
    }

    #[test]
    fn test_last_right_clicked_read_once() {
        let mut last = LastRightClicked::new();
        last.record("Song Title");
        assert_eq!(last.take(), Some("Song Title".to_string()));
        assert_eq!(last.take(), None);
    }
}
