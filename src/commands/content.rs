// ─── Instance Content ───
// Item browser (mods, resource packs, shaders, datapacks), per-row install
// actions and the installed-items lists of the current instance.

use tracing::{debug, error, info, warn};

use super::Launcher;
use crate::core::content::ContentKind;
use crate::core::host::HostApi;
use crate::core::state::{ActionState, ListState, ModalId, PendingDelete};
use crate::core::view::Region;

impl<H: HostApi> Launcher<H> {
    /// Open the browser for `kind` with an empty query and load popular items.
    pub async fn open_item_browser(&self, kind: ContentKind) {
        {
            let mut state = self.state.lock().await;
            state.content_kind = kind;
            state.content_query.clear();
            state.install_actions.clear();
            state.open_modal(ModalId::ItemBrowser);
        }
        self.emit_all([Region::Overlay, Region::ContentResults]);
        self.search_items(false).await;
    }

    /// Keystroke in the item search box; the search itself is debounced.
    pub async fn set_content_query(&self, query: &str) {
        self.state.lock().await.content_query = query.to_string();
        let launcher = self.clone();
        self.content_debounce.lock().await.schedule(async move {
            launcher.search_items(false).await;
        });
    }

    /// Fresh search from offset 0, or the next page when `load_more`.
    pub async fn search_items(&self, load_more: bool) {
        let (ticket, instance, kind) = {
            let mut state = self.state.lock().await;
            let ticket = if load_more {
                match state.content_search.begin_load_more() {
                    Some(ticket) => ticket,
                    None => return,
                }
            } else {
                let query = state.content_query.trim().to_string();
                state.content_search.begin_fresh(query, None)
            };
            (ticket, state.current_instance.clone(), state.content_kind)
        };
        self.emit(Region::ContentResults);

        debug!(
            "Searching {} '{}' (offset {})",
            kind, ticket.query, ticket.offset
        );
        let result = self
            .host
            .search_content(&ticket.query, instance.as_ref(), ticket.offset, kind)
            .await;

        let applied = {
            let mut state = self.state.lock().await;
            match result {
                Ok(page) => state.content_search.apply_page(&ticket, page),
                Err(err) => {
                    warn!("Item search failed: {}", err);
                    state.content_search.apply_error(&ticket, err.to_string())
                }
            }
        };
        if applied {
            self.emit(Region::ContentResults);
        }
    }

    /// Install one search hit into the current instance.
    pub async fn install_item(&self, project_id: &str) {
        let instance = {
            let mut state = self.state.lock().await;
            match state.current_instance.clone() {
                Some(instance) => {
                    state
                        .install_actions
                        .insert(project_id.to_string(), ActionState::Busy);
                    Some(instance)
                }
                None => None,
            }
        };
        let Some(instance) = instance else {
            self.alert_key("select_instance_first", &[]).await;
            return;
        };
        let row = Region::ContentRow(project_id.to_string());
        self.emit(row.clone());

        let outcome = self
            .host
            .install_content(&instance, project_id)
            .await
            .and_then(|outcome| outcome.into_result());

        match outcome {
            Ok(kind) => {
                info!("Installed {} into '{}'", project_id, instance.name);
                self.state
                    .lock()
                    .await
                    .install_actions
                    .insert(project_id.to_string(), ActionState::Done);
                self.emit(row);
                match kind {
                    Some(kind) => self.refresh_installed_items(kind).await,
                    None => debug!("Installed item has an unknown kind; nothing to refresh"),
                }
            }
            Err(err) => {
                error!("Failed to install {}: {}", project_id, err);
                self.state
                    .lock()
                    .await
                    .install_actions
                    .insert(project_id.to_string(), ActionState::Idle);
                self.emit(row);
                let detail = err.to_string();
                self.alert_key("install_item_failed", &[("error", detail.as_str())])
                    .await;
            }
        }
    }

    /// Reload the installed list of `kind` for the current instance.
    pub async fn refresh_installed_items(&self, kind: ContentKind) {
        let instance = {
            let mut state = self.state.lock().await;
            let Some(instance) = state.current_instance.clone() else {
                return;
            };
            state.installed.insert(kind, ListState::Loading);
            instance
        };
        self.emit(Region::InstalledItems(kind));

        let result = self.host.get_installed_items(kind, &instance).await;

        {
            let mut state = self.state.lock().await;
            if state.current_instance.as_ref().map(|i| &i.name) != Some(&instance.name) {
                debug!("Dropping {} list of '{}': instance changed", kind, instance.name);
                return;
            }
            let list = match result {
                Ok(items) => ListState::from_items(items),
                Err(err) => {
                    error!("Failed to load installed {}s: {}", kind, err);
                    ListState::Failed(err.to_string())
                }
            };
            state.installed.insert(kind, list);
        }
        self.emit(Region::InstalledItems(kind));
    }

    /// Ask before deleting `file_name`.
    pub async fn delete_item(&self, kind: ContentKind, file_name: &str) {
        {
            let mut state = self.state.lock().await;
            if state.current_instance.is_none() {
                return;
            }
            state.pending_delete = Some(PendingDelete {
                kind,
                file_name: file_name.to_string(),
            });
            state.open_modal(ModalId::DeleteItem);
        }
        self.emit(Region::Overlay);
    }

    pub async fn confirm_delete_item(&self) {
        let (pending, instance) = {
            let mut state = self.state.lock().await;
            match (state.pending_delete.take(), state.current_instance.clone()) {
                (Some(pending), Some(instance)) => (pending, instance),
                _ => return,
            }
        };

        match self
            .host
            .delete_item(pending.kind, &instance, &pending.file_name)
            .await
        {
            Ok(()) => {
                info!("Deleted {} from '{}'", pending.file_name, instance.name);
                self.refresh_installed_items(pending.kind).await;
                self.close_all_modals().await;
            }
            Err(err) => {
                error!("Failed to delete {}: {}", pending.file_name, err);
                let detail = err.to_string();
                self.alert_key("delete_item_failed", &[("error", detail.as_str())])
                    .await;
            }
        }
    }

    pub async fn cancel_delete_item(&self) {
        {
            let mut state = self.state.lock().await;
            state.pending_delete = None;
            state.close_all_modals();
        }
        self.emit(Region::Overlay);
    }
}
