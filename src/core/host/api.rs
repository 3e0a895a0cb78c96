// ─── Host Capability ───
// Everything substantive (launching, installs, accounts, persistence) lives in
// the host process. The coordinator only calls and awaits these operations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::model::{
    Account, ContentHit, InitData, InstallOutcome, InstalledItem, ModpackHit, ModpackVersion,
};
use crate::core::content::ContentKind;
use crate::core::error::UiResult;
use crate::core::instance::{InstanceSummary, LoaderKind};
use crate::core::state::UserSettings;

/// Async operations the host exposes to the front end.
///
/// A rejected call is reported as `Err(UiError::Host(..))`; the message is
/// interpolated verbatim into the alert shown to the user.
#[async_trait]
pub trait HostApi: Send + Sync + 'static {
    async fn get_init_data(&self) -> UiResult<InitData>;

    /// Ordered list of game version ids.
    async fn get_mc_versions(&self) -> UiResult<Vec<String>>;

    async fn select_instance(&self, name: &str) -> UiResult<()>;

    async fn create_instance(&self, name: &str, version: &str, loader: LoaderKind)
        -> UiResult<()>;

    /// Deletes the instance last passed to `select_instance`.
    async fn delete_current_instance(&self) -> UiResult<bool>;

    /// Starts the game for the selected instance and account. Progress comes
    /// back through [`HostEvent`]s and ends with [`HostEvent::GameClosed`].
    async fn launch_game(&self) -> UiResult<()>;

    /// At most one page (20 hits) per call.
    async fn search_modpacks(
        &self,
        query: &str,
        version_filter: Option<&str>,
        offset: usize,
    ) -> UiResult<Vec<ModpackHit>>;

    async fn get_modpack_versions(&self, project_id: &str) -> UiResult<Vec<ModpackVersion>>;

    async fn install_modpack(
        &self,
        instance_name: &str,
        project_id: &str,
        version_id: &str,
    ) -> UiResult<bool>;

    async fn import_local_modpack(&self, instance_name: &str, file_path: &str) -> UiResult<bool>;

    /// Native file picker. `None` when the user cancels.
    async fn open_file_dialog(&self) -> UiResult<Option<String>>;

    /// At most one page (20 hits) per call.
    async fn search_content(
        &self,
        query: &str,
        instance: Option<&InstanceSummary>,
        offset: usize,
        kind: ContentKind,
    ) -> UiResult<Vec<ContentHit>>;

    async fn install_content(
        &self,
        instance: &InstanceSummary,
        project_id: &str,
    ) -> UiResult<InstallOutcome>;

    async fn get_installed_items(
        &self,
        kind: ContentKind,
        instance: &InstanceSummary,
    ) -> UiResult<Vec<InstalledItem>>;

    async fn delete_item(
        &self,
        kind: ContentKind,
        instance: &InstanceSummary,
        file_name: &str,
    ) -> UiResult<()>;

    /// Returns the full account list after the addition.
    async fn add_local_account(&self, username: &str) -> UiResult<Vec<Account>>;

    /// Returns the full account list, or `None` when authentication failed.
    async fn add_remote_account(
        &self,
        username: &str,
        password: &str,
    ) -> UiResult<Option<Vec<Account>>>;

    async fn set_active_account(&self, uuid: &str) -> UiResult<()>;

    async fn save_settings(&self, settings: &UserSettings) -> UiResult<()>;
}

/// Signals the host pushes to the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum HostEvent {
    /// Run the initialization sequence (only the first one counts).
    Ready,
    /// Status line; the payload is a translation key or literal text.
    StatusUpdate(String),
    /// Progress in percent, clamped to 0..=100.
    ProgressUpdate(u32),
    /// Show or hide the progress area.
    Loading(bool),
    /// One raw line of game output.
    ConsoleAppend(String),
    GameClosed,
}
