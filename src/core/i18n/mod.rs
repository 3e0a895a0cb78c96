pub mod annotations;
pub mod bundle;
pub mod languages;
pub mod localizer;

pub use annotations::{AnnotatedText, TextRegistry, TextTarget};
pub use bundle::{Bundle, ResourceBundles};
pub use languages::{all_languages, find_language, Language, LanguageGroup, LANGUAGE_GROUPS};
pub use localizer::Localizer;
