// ─── Modpacks ───
// Modpack search, version list, install and local `.mrpack` import.

use std::future::Future;

use tracing::{debug, error, info, warn};

use super::Launcher;
use crate::core::error::UiResult;
use crate::core::host::HostApi;
use crate::core::state::{ListState, ModalId, ModpackTarget};
use crate::core::view::Region;

const MRPACK_EXTENSION: &str = ".mrpack";

/// Instance name suggested for an imported file: its file name without
/// directories or the `.mrpack` extension.
pub(crate) fn mrpack_stem(path: &str) -> &str {
    let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
    file.strip_suffix(MRPACK_EXTENSION).unwrap_or(file)
}

impl<H: HostApi> Launcher<H> {
    /// Keystroke in the modpack search box; the search itself is debounced.
    pub async fn set_modpack_query(&self, query: &str) {
        self.state.lock().await.modpack_query = query.to_string();
        let launcher = self.clone();
        self.modpack_debounce.lock().await.schedule(async move {
            launcher.search_modpacks(false).await;
        });
    }

    /// `None` is the "all versions" entry.
    pub async fn select_modpack_filter(&self, version: Option<String>) {
        {
            let mut state = self.state.lock().await;
            state.modpack_filter = version.filter(|v| !v.is_empty());
            state.close_dropdowns();
        }
        self.emit_all([Region::ModpackFilter, Region::Dropdowns]);
        self.search_modpacks(false).await;
    }

    /// Fresh search from offset 0, or the next page when `load_more`.
    pub async fn search_modpacks(&self, load_more: bool) {
        let ticket = {
            let mut state = self.state.lock().await;
            if load_more {
                match state.modpack_search.begin_load_more() {
                    Some(ticket) => ticket,
                    None => return,
                }
            } else {
                let query = state.modpack_query.clone();
                let filter = state.modpack_filter.clone();
                state.modpack_search.begin_fresh(query, filter)
            }
        };
        self.emit(Region::ModpackResults);

        debug!(
            "Searching modpacks '{}' (filter {:?}, offset {})",
            ticket.query, ticket.filter, ticket.offset
        );
        let result = self
            .host
            .search_modpacks(&ticket.query, ticket.filter.as_deref(), ticket.offset)
            .await;

        let applied = {
            let mut state = self.state.lock().await;
            match result {
                Ok(page) => state.modpack_search.apply_page(&ticket, page),
                Err(err) => {
                    warn!("Modpack search failed: {}", err);
                    state.modpack_search.apply_error(&ticket, err.to_string())
                }
            }
        };
        if applied {
            self.emit(Region::ModpackResults);
        }
    }

    /// Open the version list of one modpack.
    pub async fn open_modpack_versions(&self, project_id: &str, title: &str) {
        let target = ModpackTarget {
            project_id: project_id.to_string(),
            title: title.to_string(),
        };
        {
            let mut state = self.state.lock().await;
            state.modpack_target = Some(target.clone());
            state.modpack_versions = ListState::Loading;
            state.open_modal(ModalId::ModpackVersions);
        }
        self.emit_all([Region::Overlay, Region::ModpackVersions]);

        let result = self.host.get_modpack_versions(project_id).await;

        let mut state = self.state.lock().await;
        if state.modpack_target.as_ref() != Some(&target) {
            debug!("Dropping versions of '{}': another modpack was opened", title);
            return;
        }
        state.modpack_versions = match result {
            Ok(versions) => ListState::from_items(versions),
            Err(err) => {
                error!("Failed to load versions of '{}': {}", title, err);
                ListState::Failed(err.to_string())
            }
        };
        drop(state);
        self.emit(Region::ModpackVersions);
    }

    /// Picked a version: ask for an instance name, then install.
    pub async fn install_modpack_version(&self, version_id: &str) {
        let (target, default_name, message) = {
            let state = self.state.lock().await;
            let Some(target) = state.modpack_target.clone() else {
                return;
            };
            let version_name = match &state.modpack_versions {
                ListState::Loaded(versions) => versions
                    .iter()
                    .find(|v| v.id == version_id)
                    .and_then(|v| v.name.clone()),
                _ => None,
            }
            .unwrap_or_else(|| version_id.to_string());
            let default_name = format!("{} {}", target.title, version_name);
            (target, default_name, state.tr("enter_instance_name", &[]))
        };

        let name = match self.show_prompt(&message, &default_name).await {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => return,
        };

        self.close_all_modals().await;
        info!("Installing modpack {} ({}) as '{}'", target.project_id, version_id, name);
        let host = &self.host;
        self.run_modpack_job(
            "installing_modpack",
            "modpack_installed",
            "modpack_install_failed",
            host.install_modpack(&name, &target.project_id, version_id),
        )
        .await;
    }

    /// Native file picker; fills the import name from the file when empty.
    pub async fn select_mrpack_file(&self) {
        let path = match self.host.open_file_dialog().await {
            Ok(Some(path)) => path,
            Ok(None) => return,
            Err(err) => {
                warn!("File dialog failed: {}", err);
                return;
            }
        };
        {
            let mut state = self.state.lock().await;
            if state.import_form.name.is_empty() {
                state.import_form.name = mrpack_stem(&path).to_string();
            }
            state.import_form.file_path = path;
        }
        self.emit(Region::Tabs);
    }

    pub async fn set_import_name(&self, name: &str) {
        self.state.lock().await.import_form.name = name.to_string();
    }

    pub async fn import_mrpack(&self) {
        let (name, path) = {
            let state = self.state.lock().await;
            (
                state.import_form.name.trim().to_string(),
                state.import_form.file_path.clone(),
            )
        };
        if name.is_empty() || path.is_empty() {
            self.alert_key("select_file_and_name", &[]).await;
            return;
        }

        self.close_all_modals().await;
        info!("Importing {} as '{}'", path, name);
        let host = &self.host;
        self.run_modpack_job(
            "importing_mrpack",
            "mrpack_imported",
            "mrpack_import_failed",
            host.import_local_modpack(&name, &path),
        )
        .await;
    }

    /// Shared install/import flow: status and progress on, await the host,
    /// report, then back to "ready" whatever happened.
    async fn run_modpack_job<F>(&self, status_key: &str, success_key: &str, failure_key: &str, job: F)
    where
        F: Future<Output = UiResult<bool>>,
    {
        {
            let mut state = self.state.lock().await;
            state.set_status(status_key);
            state.set_loading(true);
        }
        self.emit_all([Region::Status, Region::Progress]);

        match job.await {
            Ok(true) => {
                self.refresh_instances().await;
                self.alert_key(success_key, &[]).await;
            }
            Ok(false) => {
                warn!("Host reported failure for '{}'", status_key);
                self.alert_key(failure_key, &[]).await;
            }
            Err(err) => {
                error!("'{}' failed: {}", status_key, err);
                self.alert_error(&err).await;
            }
        }

        {
            let mut state = self.state.lock().await;
            state.set_loading(false);
            state.set_status("ready");
        }
        self.emit_all([Region::Status, Region::Progress]);
    }
}

#[cfg(test)]
mod tests {
    use super::mrpack_stem;

    #[test]
    fn stem_strips_directories_and_extension() {
        assert_eq!(mrpack_stem("/home/me/packs/Fabulously Optimized.mrpack"), "Fabulously Optimized");
        assert_eq!(mrpack_stem(r"C:\Users\me\Pack.mrpack"), "Pack");
        assert_eq!(mrpack_stem("pack.zip"), "pack.zip");
    }
}
