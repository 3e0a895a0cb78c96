use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::UiError;

/// Legacy name some hosts still send for shader packs.
const LEGACY_SHADER_ALIAS: &str = "shaderpack";

/// The four kinds of installable content.
///
/// Raw kind names are normalized on entry: the legacy `shaderpack` alias maps
/// to [`ContentKind::ShaderPack`], so nothing downstream sees it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ContentKind {
    #[serde(rename = "mod")]
    Mod,
    #[serde(rename = "resourcepack")]
    ResourcePack,
    #[serde(rename = "shader", alias = "shaderpack")]
    ShaderPack,
    #[serde(rename = "datapack")]
    Datapack,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Mod,
        ContentKind::ResourcePack,
        ContentKind::ShaderPack,
        ContentKind::Datapack,
    ];

    /// Canonical wire name, also the catalog `project_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Mod => "mod",
            ContentKind::ResourcePack => "resourcepack",
            ContentKind::ShaderPack => "shader",
            ContentKind::Datapack => "datapack",
        }
    }

    /// Parse a raw kind name, accepting the legacy shader alias.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case(LEGACY_SHADER_ALIAS) {
            return Some(ContentKind::ShaderPack);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value))
    }

    /// Translation key for the item browser title.
    pub fn browser_title_key(self) -> &'static str {
        match self {
            ContentKind::Mod => "add_mods_title",
            ContentKind::ResourcePack => "add_resource_packs_title",
            ContentKind::ShaderPack => "add_shaders_title",
            ContentKind::Datapack => "add_datapacks_title",
        }
    }

    /// Translation key for the "nothing installed" state.
    pub fn empty_key(self) -> &'static str {
        match self {
            ContentKind::Mod => "no_mods_installed",
            ContentKind::ResourcePack => "no_resource_packs_installed",
            ContentKind::ShaderPack => "no_shaders_installed",
            ContentKind::Datapack => "no_datapacks_installed",
        }
    }
}

impl FromStr for ContentKind {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UiError::UnknownContentKind(s.to_string()))
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_shader_alias_normalizes() {
        assert_eq!(ContentKind::parse("shaderpack"), Some(ContentKind::ShaderPack));
        assert_eq!(ContentKind::parse("shader"), Some(ContentKind::ShaderPack));
        assert_eq!(ContentKind::ShaderPack.as_str(), "shader");
    }

    #[test]
    fn serde_accepts_alias_and_writes_canonical() {
        let kind: ContentKind = serde_json::from_str("\"shaderpack\"").unwrap();
        assert_eq!(kind, ContentKind::ShaderPack);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"shader\"");
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let err = "plugin".parse::<ContentKind>().unwrap_err();
        assert!(matches!(err, UiError::UnknownContentKind(k) if k == "plugin"));
        assert_eq!("resourcepack".parse::<ContentKind>().unwrap(), ContentKind::ResourcePack);
    }
}
