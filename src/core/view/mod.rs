pub mod model;
pub mod render;

use serde::Serialize;

use crate::core::content::ContentKind;

pub use model::*;

/// A part of the screen that needs redrawing after a state change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "region", content = "id", rename_all = "snake_case")]
pub enum Region {
    AnnotatedText,
    LanguagePicker,
    Screen,
    Instances,
    Accounts,
    Versions,
    Loaders,
    ModpackFilter,
    CreateForm,
    Tabs,
    Dropdowns,
    Overlay,
    ModpackResults,
    ModpackVersions,
    ContentResults,
    /// One content search row, by project id.
    ContentRow(String),
    InstalledItems(ContentKind),
    Status,
    Progress,
    Console,
    Settings,
}
