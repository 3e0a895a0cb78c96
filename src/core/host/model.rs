use serde::{Deserialize, Serialize};

use crate::core::content::ContentKind;
use crate::core::error::{UiError, UiResult};
use crate::core::instance::InstanceSummary;
use crate::core::state::UserSettings;

/// A launcher account as listed by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub uuid: String,
    pub username: String,
    /// `local`, `elyby`, ...
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Payload of `get_init_data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitData {
    #[serde(default)]
    pub instances: Vec<InstanceSummary>,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub current_account: Option<Account>,
    #[serde(default)]
    pub config: UserSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModpackHit {
    pub project_id: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModpackVersion {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date_published: Option<String>,
    #[serde(default)]
    pub game_versions: Vec<String>,
    #[serde(default)]
    pub loaders: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentHit {
    pub project_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon_url: Option<String>,
}

/// Result of `install_content`: `{success, type}` or `{success: false, error}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallOutcome {
    pub success: bool,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl InstallOutcome {
    pub fn installed(kind: ContentKind) -> Self {
        Self {
            success: true,
            kind: Some(kind.as_str().to_string()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            kind: None,
            error: Some(error.into()),
        }
    }

    /// Kind of the installed item, normalized. A missing kind means a mod;
    /// an unrecognized one yields `Ok(None)`.
    pub fn into_result(self) -> UiResult<Option<ContentKind>> {
        if !self.success {
            return Err(UiError::Host(
                self.error.unwrap_or_else(|| "unknown error".into()),
            ));
        }
        Ok(match self.kind.as_deref() {
            None => Some(ContentKind::Mod),
            Some(raw) => ContentKind::parse(raw),
        })
    }
}

/// One file in an instance content folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstalledItem {
    #[serde(default)]
    pub name: Option<String>,
    pub file_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_outcome_normalizes_legacy_kind() {
        let outcome: InstallOutcome =
            serde_json::from_str(r#"{"success":true,"type":"shaderpack"}"#).unwrap();
        assert_eq!(outcome.into_result().unwrap(), Some(ContentKind::ShaderPack));

        let outcome: InstallOutcome = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(outcome.into_result().unwrap(), Some(ContentKind::Mod));
    }

    #[test]
    fn failed_install_carries_host_message() {
        let err = InstallOutcome::failed("no compatible version")
            .into_result()
            .unwrap_err();
        assert_eq!(err.to_string(), "no compatible version");
    }

    #[test]
    fn account_type_field_maps_to_kind() {
        let acc: Account =
            serde_json::from_str(r#"{"uuid":"u-1","username":"Steve","type":"elyby"}"#).unwrap();
        assert_eq!(acc.kind, "elyby");
    }
}
