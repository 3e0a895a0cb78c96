// ─── View State ───
// Everything the renderers read. Owned by a single coordinator and mutated
// only through the named operations below.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use super::settings::UserSettings;
use crate::core::content::ContentKind;
use crate::core::dialog::DialogBridge;
use crate::core::host::{Account, ContentHit, InstalledItem, ModpackHit, ModpackVersion};
use crate::core::i18n::{Localizer, TextRegistry};
use crate::core::instance::{InstanceSummary, LoaderKind};
use crate::core::search::SearchSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Home,
    InstanceDetail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropdownId {
    Account,
    Language,
    Version,
    Loader,
    ModpackVersion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalId {
    Create,
    Settings,
    AddAccount,
    ModpackVersions,
    ItemBrowser,
    DeleteItem,
    Alert,
    Confirm,
    Prompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CreateTab {
    Custom,
    Modpack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthTab {
    Offline,
    ElyBy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "tab", content = "kind", rename_all = "snake_case")]
pub enum InstanceTab {
    Console,
    Content(ContentKind),
}

/// A host-backed list that loads on demand.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    NotLoaded,
    Loading,
    Empty,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState::NotLoaded
    }
}

impl<T> ListState<T> {
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            ListState::Empty
        } else {
            ListState::Loaded(items)
        }
    }
}

/// Visual state of a per-row primary action (install, pick version).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionState {
    #[default]
    Idle,
    Busy,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateForm {
    pub name: String,
    pub version: Option<String>,
    pub loader: LoaderKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportForm {
    pub visible: bool,
    pub name: String,
    pub file_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModpackTarget {
    pub project_id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub kind: ContentKind,
    pub file_name: String,
}

/// Status bar, progress area and launch control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// Translation key or literal text; resolved at render time.
    pub key: String,
    pub loading: bool,
    pub progress: u8,
    pub launch_enabled: bool,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            key: "ready".into(),
            loading: false,
            progress: 0,
            launch_enabled: true,
        }
    }
}

#[derive(Debug)]
pub struct ViewState {
    pub localizer: Localizer,
    pub texts: TextRegistry,
    pub initialized: bool,

    // ── Selection ──
    pub screen: Screen,
    pub instances: Vec<InstanceSummary>,
    pub current_instance: Option<InstanceSummary>,
    pub accounts: Vec<Account>,
    pub current_account: Option<Account>,

    // ── Pickers / forms ──
    pub versions: Vec<String>,
    pub version_query: String,
    pub create_form: CreateForm,
    pub import_form: ImportForm,
    pub settings: UserSettings,

    // ── Chrome ──
    pub open_dropdown: Option<DropdownId>,
    pub open_modal: Option<ModalId>,
    pub create_tab: CreateTab,
    pub auth_tab: AuthTab,
    pub instance_tab: InstanceTab,
    pub dialogs: DialogBridge,

    // ── Modpacks ──
    pub modpack_query: String,
    pub modpack_filter: Option<String>,
    pub modpack_search: SearchSession<ModpackHit>,
    pub modpack_target: Option<ModpackTarget>,
    pub modpack_versions: ListState<ModpackVersion>,

    // ── Content browser ──
    pub content_kind: ContentKind,
    pub content_query: String,
    pub content_search: SearchSession<ContentHit>,
    pub install_actions: HashMap<String, ActionState>,
    pub installed: HashMap<ContentKind, ListState<InstalledItem>>,
    pub pending_delete: Option<PendingDelete>,

    // ── Game ──
    pub status: StatusLine,
    pub console: Vec<String>,
}

impl ViewState {
    pub fn new(localizer: Localizer, page_size: usize) -> Self {
        Self {
            localizer,
            texts: TextRegistry::default(),
            initialized: false,
            screen: Screen::Home,
            instances: Vec::new(),
            current_instance: None,
            accounts: Vec::new(),
            current_account: None,
            versions: Vec::new(),
            version_query: String::new(),
            create_form: CreateForm::default(),
            import_form: ImportForm::default(),
            settings: UserSettings::default(),
            open_dropdown: None,
            open_modal: None,
            create_tab: CreateTab::Custom,
            auth_tab: AuthTab::Offline,
            instance_tab: InstanceTab::Console,
            dialogs: DialogBridge::default(),
            modpack_query: String::new(),
            modpack_filter: None,
            modpack_search: SearchSession::new(page_size),
            modpack_target: None,
            modpack_versions: ListState::NotLoaded,
            content_kind: ContentKind::Mod,
            content_query: String::new(),
            content_search: SearchSession::new(page_size),
            install_actions: HashMap::new(),
            installed: HashMap::new(),
            pending_delete: None,
            status: StatusLine::default(),
            console: Vec::new(),
        }
    }

    /// Shorthand for `localizer.translate`.
    pub fn tr(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.localizer.translate(key, params)
    }

    // ── Instances ───────────────────────────────────────

    pub fn select_instance(&mut self, instance: InstanceSummary) {
        self.current_instance = Some(instance);
        self.screen = Screen::InstanceDetail;
    }

    pub fn show_home(&mut self) {
        self.current_instance = None;
        self.screen = Screen::Home;
    }

    /// Index of the one list entry drawn as active.
    pub fn active_instance_index(&self) -> Option<usize> {
        let current = self.current_instance.as_ref()?;
        self.instances.iter().position(|i| i.name == current.name)
    }

    // ── Accounts ────────────────────────────────────────

    pub fn set_accounts(&mut self, accounts: Vec<Account>, current: Option<Account>) {
        self.accounts = accounts;
        self.current_account = current;
    }

    /// Point the current account at `uuid`. An unknown uuid clears it.
    pub fn select_account(&mut self, uuid: &str) -> bool {
        self.current_account = self.accounts.iter().find(|a| a.uuid == uuid).cloned();
        self.current_account.is_some()
    }

    // ── Dropdowns & modals ──────────────────────────────

    /// Open `id` (closing every other dropdown) or close it if already open.
    pub fn toggle_dropdown(&mut self, id: DropdownId) {
        let was_open = self.open_dropdown == Some(id);
        self.open_dropdown = if was_open { None } else { Some(id) };
    }

    pub fn close_dropdowns(&mut self) {
        self.open_dropdown = None;
    }

    pub fn open_modal(&mut self, id: ModalId) {
        self.open_modal = Some(id);
        if id == ModalId::Create {
            self.switch_create_tab(CreateTab::Custom);
        }
    }

    /// Hide the overlay. Dialogs still waiting on the user resolve as cancelled.
    pub fn close_all_modals(&mut self) {
        self.open_modal = None;
        let cancelled = self.dialogs.cancel_all();
        if cancelled > 0 {
            debug!("Closing modals cancelled {} pending dialog(s)", cancelled);
        }
    }

    pub fn switch_create_tab(&mut self, tab: CreateTab) {
        self.create_tab = tab;
        self.import_form.visible = false;
    }

    // ── Versions & loaders ──────────────────────────────

    /// Versions matching the picker filter (case-insensitive substring).
    pub fn filtered_versions(&self) -> Vec<&str> {
        let needle = self.version_query.to_lowercase();
        self.versions
            .iter()
            .filter(|v| v.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    pub fn select_version(&mut self, version: &str) {
        self.create_form.version = Some(version.to_string());
    }

    pub fn select_loader(&mut self, loader: LoaderKind) {
        self.create_form.loader = loader;
    }

    // ── Status / game ───────────────────────────────────

    pub fn set_status(&mut self, key: impl Into<String>) {
        self.status.key = key.into();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.status.loading = loading;
    }

    pub fn set_progress(&mut self, percent: u32) {
        self.status.progress = percent.min(100) as u8;
    }

    pub fn game_closed(&mut self) {
        self.status.launch_enabled = true;
        self.status.loading = false;
        self.status.key = "ready".into();
    }

    pub fn installed_items(&self, kind: ContentKind) -> &ListState<InstalledItem> {
        static NOT_LOADED: ListState<InstalledItem> = ListState::NotLoaded;
        self.installed.get(&kind).unwrap_or(&NOT_LOADED)
    }
}
