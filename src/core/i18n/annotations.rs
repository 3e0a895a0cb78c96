use serde::Serialize;

use super::localizer::Localizer;

/// Where translated text lands on an annotated element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTarget {
    /// The element's text content.
    Content,
    /// The placeholder attribute of an input-like element.
    Placeholder,
}

/// An element carrying a translation-key annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedText {
    pub element_id: String,
    pub key: String,
    pub target: TextTarget,
    pub text: String,
}

/// Every annotated element the front end has registered.
#[derive(Debug, Clone, Default)]
pub struct TextRegistry {
    entries: Vec<AnnotatedText>,
}

impl TextRegistry {
    /// Register (or re-key) an element and resolve its text immediately.
    pub fn register(
        &mut self,
        element_id: &str,
        key: &str,
        target: TextTarget,
        localizer: &Localizer,
    ) {
        let text = localizer.t(key);
        match self.entries.iter_mut().find(|e| e.element_id == element_id) {
            Some(entry) => {
                entry.key = key.to_string();
                entry.target = target;
                entry.text = text;
            }
            None => self.entries.push(AnnotatedText {
                element_id: element_id.to_string(),
                key: key.to_string(),
                target,
                text,
            }),
        }
    }

    pub fn unregister(&mut self, element_id: &str) {
        self.entries.retain(|e| e.element_id != element_id);
    }

    /// Overwrite every registered element with its current translation.
    pub fn refresh(&mut self, localizer: &Localizer) -> usize {
        for entry in &mut self.entries {
            entry.text = localizer.t(&entry.key);
        }
        self.entries.len()
    }

    pub fn get(&self, element_id: &str) -> Option<&AnnotatedText> {
        self.entries.iter().find(|e| e.element_id == element_id)
    }

    pub fn entries(&self) -> &[AnnotatedText] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::i18n::{Bundle, ResourceBundles};

    #[test]
    fn refresh_rewrites_text_and_placeholders() {
        let mut bundles = ResourceBundles::new();
        bundles.insert("en", Bundle::from_pairs([("search", "Search"), ("play", "Play")]));
        bundles.insert("de", Bundle::from_pairs([("search", "Suchen"), ("play", "Spielen")]));
        let mut l = Localizer::new(bundles, "en");

        let mut registry = TextRegistry::default();
        registry.register("playBtn", "play", TextTarget::Content, &l);
        registry.register("modSearchInput", "search", TextTarget::Placeholder, &l);
        assert_eq!(registry.get("playBtn").unwrap().text, "Play");

        assert!(l.set_language("de"));
        assert_eq!(registry.refresh(&l), 2);
        assert_eq!(registry.get("playBtn").unwrap().text, "Spielen");
        let input = registry.get("modSearchInput").unwrap();
        assert_eq!(input.text, "Suchen");
        assert_eq!(input.target, TextTarget::Placeholder);
    }

    #[test]
    fn register_replaces_existing_element() {
        let l = Localizer::new(ResourceBundles::new(), "en");
        let mut registry = TextRegistry::default();
        registry.register("title", "a", TextTarget::Content, &l);
        registry.register("title", "b", TextTarget::Content, &l);
        assert_eq!(registry.entries().len(), 1);
        assert_eq!(registry.get("title").unwrap().text, "b");

        registry.unregister("title");
        assert!(registry.entries().is_empty());
    }
}
