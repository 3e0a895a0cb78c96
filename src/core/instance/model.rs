use serde::{Deserialize, Serialize};

/// Mod loaders offered by the create form.
///
/// Serialized with the display casing the host stores (`"NeoForge"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LoaderKind {
    Vanilla,
    Fabric,
    Forge,
    Quilt,
    NeoForge,
}

impl LoaderKind {
    /// Fixed picker order.
    pub const ALL: [LoaderKind; 5] = [
        LoaderKind::Vanilla,
        LoaderKind::Fabric,
        LoaderKind::Forge,
        LoaderKind::Quilt,
        LoaderKind::NeoForge,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LoaderKind::Vanilla => "Vanilla",
            LoaderKind::Fabric => "Fabric",
            LoaderKind::Forge => "Forge",
            LoaderKind::Quilt => "Quilt",
            LoaderKind::NeoForge => "NeoForge",
        }
    }

    /// Case-insensitive parse of a host loader label.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value))
    }

    /// Lower-case id used by catalog facets (`categories:fabric`).
    pub fn catalog_id(self) -> String {
        self.as_str().to_ascii_lowercase()
    }

    pub fn is_modded(self) -> bool {
        self != LoaderKind::Vanilla
    }
}

impl Default for LoaderKind {
    fn default() -> Self {
        LoaderKind::Vanilla
    }
}

impl std::fmt::Display for LoaderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An instance as the host reports it.
///
/// The name doubles as the opaque handle the host uses for
/// `select_instance`, searches and installs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceSummary {
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub loader: String,
}

impl InstanceSummary {
    pub fn new(name: impl Into<String>, version: impl Into<String>, loader: LoaderKind) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            loader: loader.to_string(),
        }
    }

    /// Loader parsed from the host label, `None` for labels we don't know.
    pub fn loader_kind(&self) -> Option<LoaderKind> {
        LoaderKind::parse(&self.loader)
    }
}
