// ─── View Descriptions ───
// Toolkit-independent output of the renderers. Every type serializes to JSON
// so a web view, egui or slint front end can draw it.

use serde::Serialize;

use crate::core::content::ContentKind;
use crate::core::dialog::DialogContent;
use crate::core::state::{ActionState, AuthTab, CreateTab, DropdownId, InstanceTab, ModalId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Cube,
    Scroll,
    Hammer,
    User,
    UserSlash,
    Check,
    Spinner,
    Download,
    PuzzlePiece,
    Palette,
    Sun,
    Database,
    BoxOpen,
    Warning,
    Trash,
    Plus,
}

impl Icon {
    pub fn for_content(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Mod => Icon::PuzzlePiece,
            ContentKind::ResourcePack => Icon::Palette,
            ContentKind::ShaderPack => Icon::Sun,
            ContentKind::Datapack => Icon::Database,
        }
    }
}

// ── Sidebar / header ────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstanceEntryView {
    pub name: String,
    /// "<loader> <version>"
    pub subtitle: String,
    pub icon: Icon,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenView {
    Home,
    Instance {
        name: String,
        version: String,
        loader: String,
        tab: InstanceTab,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Avatar {
    Initial(char),
    Icon(Icon),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountHeaderView {
    pub name: String,
    pub subtitle: String,
    pub avatar: Avatar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountEntryView {
    pub uuid: String,
    pub username: String,
    pub kind_label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountsView {
    pub header: AccountHeaderView,
    pub entries: Vec<AccountEntryView>,
    /// Placeholder text when there are no accounts.
    pub empty_text: Option<String>,
    pub auth_tab: AuthTab,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageEntryView {
    pub code: String,
    pub flag: String,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageGroupView {
    pub title: String,
    pub entries: Vec<LanguageEntryView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguagePickerView {
    pub current_flag: String,
    pub current_name: String,
    pub groups: Vec<LanguageGroupView>,
}

// ── Pickers ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickerEntryView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickerView {
    /// Button text; `None` while nothing is chosen.
    pub button_text: Option<String>,
    pub entries: Vec<PickerEntryView>,
}

// ── Search results ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadMoreView {
    pub label: String,
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResultsView<R> {
    Idle,
    Loading { message: Option<String> },
    Empty { message: String },
    Error { message: String },
    Rows {
        rows: Vec<R>,
        load_more: Option<LoadMoreView>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionView {
    pub label: String,
    pub icon: Icon,
    pub state: ActionState,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModpackRowView {
    pub project_id: String,
    pub title: String,
    pub author: String,
    pub icon_url: String,
    pub action: ActionView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentRowView {
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub icon_url: Option<String>,
    pub action: ActionView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemBrowserView {
    pub kind: ContentKind,
    pub title: String,
    pub query: String,
    /// Inline spinner next to the search box.
    pub searching: bool,
    pub results: ResultsView<ContentRowView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModpackVersionRowView {
    pub id: String,
    pub name: String,
    /// "<game versions> • <loaders>"
    pub details: String,
    pub published: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListView<R> {
    Hidden,
    Loading { message: String },
    Empty { message: String },
    Error { message: String },
    Items { rows: Vec<R> },
}

// ── Installed items ─────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstalledItemView {
    pub file_name: String,
    pub display_name: String,
    pub sub_text: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum InstalledItemsView {
    Hidden,
    Loading {
        message: String,
    },
    Empty {
        message: String,
        add_label: String,
        kind: ContentKind,
    },
    Error {
        title: String,
        detail: String,
        retry_label: String,
    },
    Items {
        rows: Vec<InstalledItemView>,
    },
}

// ── Chrome ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressView {
    pub percent: u8,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusView {
    pub text: String,
    pub progress: Option<ProgressView>,
    pub launch_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateModalView {
    pub tab: CreateTab,
    pub import_visible: bool,
    pub name: String,
    pub version: PickerView,
    pub loader: PickerView,
    pub modpack_filter: PickerView,
    pub modpacks: ResultsView<ModpackRowView>,
    pub import_name: String,
    pub import_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayView {
    pub visible: bool,
    pub modal: Option<ModalId>,
    /// Alert / confirm / prompt content when one of those is the open modal.
    pub dialog: Option<DialogContent>,
    pub delete_message: Option<String>,
}

/// The whole window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppView {
    pub version_label: String,
    pub screen: ScreenView,
    pub instances: Vec<InstanceEntryView>,
    pub accounts: AccountsView,
    pub language_picker: LanguagePickerView,
    pub open_dropdown: Option<DropdownId>,
    pub overlay: OverlayView,
    pub status: StatusView,
    pub console: Vec<String>,
}
