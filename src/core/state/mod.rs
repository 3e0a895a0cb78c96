pub mod settings;
pub mod view_state;

pub use settings::{UiConfig, UserSettings};
pub use view_state::{
    ActionState, AuthTab, CreateForm, CreateTab, DropdownId, ImportForm, InstanceTab, ListState,
    ModalId, ModpackTarget, PendingDelete, Screen, StatusLine, ViewState,
};
