use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::languages::find_language;
use crate::core::error::{UiError, UiResult};

const BUILTIN_EN: &str = include_str!("../../../locales/en.json");

/// Translations for one language: `{ "translation": { key: template } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(default)]
    pub translation: HashMap<String, String>,
}

impl Bundle {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            translation: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Template for `key`. Empty templates count as missing.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.translation
            .get(key)
            .map(String::as_str)
            .filter(|template| !template.is_empty())
    }
}

/// Language code → bundle.
#[derive(Debug, Clone, Default)]
pub struct ResourceBundles {
    bundles: HashMap<String, Bundle>,
}

impl ResourceBundles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundles shipped with the crate (English).
    pub fn builtin() -> UiResult<Self> {
        let mut bundles = Self::new();
        bundles.insert("en", serde_json::from_str(BUILTIN_EN)?);
        Ok(bundles)
    }

    /// Adds `bundle`, merging keys into an existing bundle for `code`.
    pub fn insert(&mut self, code: impl Into<String>, bundle: Bundle) {
        self.bundles
            .entry(code.into())
            .or_default()
            .translation
            .extend(bundle.translation);
    }

    pub fn get(&self, code: &str) -> Option<&Bundle> {
        self.bundles.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.bundles.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Parse one locale file.
    ///
    /// A file named after a known language code (`de.json`) holds a single
    /// bundle; any other name (`slavic.json`) holds `{ code: bundle, ... }`.
    pub fn load_str(&mut self, file_stem: &str, raw: &str) -> UiResult<usize> {
        if find_language(file_stem).is_some() {
            self.insert(file_stem, serde_json::from_str(raw)?);
            return Ok(1);
        }

        let group: HashMap<String, Bundle> = serde_json::from_str(raw)?;
        let count = group.len();
        for (code, bundle) in group {
            self.insert(code, bundle);
        }
        Ok(count)
    }

    /// Load every `*.json` file in `dir`. Unreadable or malformed files are skipped.
    pub fn load_dir(&mut self, dir: &Path) -> UiResult<usize> {
        let entries = std::fs::read_dir(dir).map_err(|source| UiError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut loaded = 0;
        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(error) => {
                    warn!("Skipping unreadable entry in {:?}: {}", dir, error);
                    continue;
                }
            };
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let raw = match std::fs::read_to_string(&path) {
                Ok(raw) => raw,
                Err(error) => {
                    warn!("Skipping unreadable locale file {:?}: {}", path, error);
                    continue;
                }
            };
            match self.load_str(stem, &raw) {
                Ok(count) => {
                    debug!("Loaded {} locale bundle(s) from {:?}", count, path);
                    loaded += count;
                }
                Err(error) => warn!("Skipping locale file {:?}: {}", path, error),
            }
        }

        Ok(loaded)
    }
}
