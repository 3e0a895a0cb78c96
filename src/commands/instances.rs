// ─── Instances ───
// Selection, creation and deletion of game instances, plus the version and
// loader pickers of the create form.

use tracing::{error, info, warn};

use super::Launcher;
use crate::core::host::HostApi;
use crate::core::instance::{InstanceSummary, LoaderKind};
use crate::core::view::Region;

impl<H: HostApi> Launcher<H> {
    /// Make `instance` the current one and show its detail screen.
    ///
    /// The view switches immediately; a host failure is only logged.
    pub async fn select_instance(&self, instance: InstanceSummary) {
        let name = instance.name.clone();
        self.state.lock().await.select_instance(instance);
        self.emit_all([Region::Instances, Region::Screen]);

        if let Err(err) = self.host.select_instance(&name).await {
            warn!("Host did not accept instance '{}': {}", name, err);
        }
    }

    pub async fn show_home(&self) {
        self.state.lock().await.show_home();
        self.emit_all([Region::Instances, Region::Screen]);
    }

    /// Reload the instance list from the host.
    pub(crate) async fn refresh_instances(&self) {
        match self.host.get_init_data().await {
            Ok(data) => {
                self.state.lock().await.instances = data.instances;
                self.emit(Region::Instances);
            }
            Err(err) => warn!("Failed to reload instances: {}", err),
        }
    }

    pub async fn set_instance_name(&self, name: &str) {
        self.state.lock().await.create_form.name = name.to_string();
    }

    pub async fn create_instance(&self) {
        let (name, version, loader) = {
            let state = self.state.lock().await;
            let form = &state.create_form;
            (form.name.trim().to_string(), form.version.clone(), form.loader)
        };
        let version = match version.filter(|v| !v.is_empty()) {
            Some(version) if !name.is_empty() => version,
            _ => {
                self.alert_key("fill_instance_form", &[]).await;
                return;
            }
        };

        info!("Creating instance '{}' ({} {})", name, loader, version);
        if let Err(err) = self.host.create_instance(&name, &version, loader).await {
            error!("Failed to create instance '{}': {}", name, err);
            self.alert_error(&err).await;
            return;
        }

        self.refresh_instances().await;
        {
            let mut state = self.state.lock().await;
            state.create_form.name.clear();
            state.close_all_modals();
        }
        self.emit_all([Region::CreateForm, Region::Overlay]);
    }

    /// Delete the current instance after confirmation.
    pub async fn delete_instance(&self) {
        let message = self.translate("confirm_delete_instance", &[]).await;
        if !self.show_confirm(&message).await {
            return;
        }

        match self.host.delete_current_instance().await {
            Ok(true) => {
                info!("Instance deleted");
                self.refresh_instances().await;
                self.show_home().await;
            }
            Ok(false) => warn!("Host refused to delete the current instance"),
            Err(err) => {
                error!("Failed to delete instance: {}", err);
                self.alert_error(&err).await;
            }
        }
    }

    // ── Version & loader pickers ────────────────────────

    pub async fn filter_versions(&self, query: &str) {
        self.state.lock().await.version_query = query.to_string();
        self.emit(Region::Versions);
    }

    /// Picked from the version dropdown.
    pub async fn select_version(&self, version: &str) {
        {
            let mut state = self.state.lock().await;
            state.select_version(version);
            state.close_dropdowns();
        }
        self.emit_all([Region::CreateForm, Region::Versions, Region::Dropdowns]);
    }

    pub async fn select_loader(&self, loader: LoaderKind) {
        {
            let mut state = self.state.lock().await;
            state.select_loader(loader);
            state.close_dropdowns();
        }
        self.emit_all([Region::CreateForm, Region::Loaders, Region::Dropdowns]);
    }
}
