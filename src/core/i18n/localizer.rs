use tracing::debug;

use super::bundle::{Bundle, ResourceBundles};
use super::languages::{language_or_first, Language};

/// Active language plus the bundle table it resolves against.
#[derive(Debug, Clone)]
pub struct Localizer {
    lang: String,
    default_lang: String,
    bundles: ResourceBundles,
}

impl Localizer {
    /// Starts on `default_lang`, which is also the fallback bundle.
    pub fn new(bundles: ResourceBundles, default_lang: impl Into<String>) -> Self {
        let default_lang = default_lang.into();
        Self {
            lang: default_lang.clone(),
            default_lang,
            bundles,
        }
    }

    pub fn language(&self) -> &str {
        &self.lang
    }

    pub fn default_language(&self) -> &str {
        &self.default_lang
    }

    pub fn bundles(&self) -> &ResourceBundles {
        &self.bundles
    }

    /// Entry shown in the compact "current language" display.
    pub fn current_entry(&self) -> &'static Language {
        language_or_first(&self.lang)
    }

    /// Switch languages. Codes without a bundle are ignored and `false` is
    /// returned; nothing is surfaced to the user.
    pub fn set_language(&mut self, code: &str) -> bool {
        if !self.bundles.contains(code) {
            debug!("Ignoring language change to '{}': no bundle", code);
            return false;
        }
        self.lang = code.to_string();
        true
    }

    fn active_bundle(&self) -> Option<&Bundle> {
        self.bundles
            .get(&self.lang)
            .or_else(|| self.bundles.get(&self.default_lang))
    }

    /// Resolve `key` and substitute every `{{name}}` token for each param.
    ///
    /// Only a missing bundle falls back to the default language; a key missing
    /// from the active bundle resolves to the key itself.
    pub fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut text = self
            .active_bundle()
            .and_then(|bundle| bundle.get(key))
            .unwrap_or(key)
            .to_string();

        for (name, value) in params {
            let token = format!("{{{{{name}}}}}");
            text = text.replace(&token, value);
        }
        text
    }

    /// `translate` without parameters.
    pub fn t(&self, key: &str) -> String {
        self.translate(key, &[])
    }
}
