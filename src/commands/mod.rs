// ─── Launcher Coordinator ───
// Front-end operations: each one mutates the view state under a short lock,
// awaits the host with the lock released, then publishes the regions that
// need redrawing.

mod accounts;
mod content;
mod dialogs;
mod instances;
mod modpacks;

use std::sync::Arc;

use tokio::sync::{broadcast, Mutex};
use tracing::{debug, error, info, warn};

use crate::core::error::UiResult;
use crate::core::host::{HostApi, HostEvent};
use crate::core::i18n::{Localizer, ResourceBundles, TextTarget};
use crate::core::search::Debouncer;
use crate::core::state::{AuthTab, CreateTab, DropdownId, InstanceTab, ModalId, UiConfig, ViewState};
use crate::core::view::render;
use crate::core::view::{AppView, Region};

const REDRAW_CAPACITY: usize = 256;

/// The single owner of the front-end view state.
///
/// Cheap to clone; clones share state, host and redraw channel.
pub struct Launcher<H: HostApi> {
    host: Arc<H>,
    state: Arc<Mutex<ViewState>>,
    config: Arc<UiConfig>,
    redraw: broadcast::Sender<Region>,
    modpack_debounce: Arc<Mutex<Debouncer>>,
    content_debounce: Arc<Mutex<Debouncer>>,
}

impl<H: HostApi> Clone for Launcher<H> {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
            state: Arc::clone(&self.state),
            config: Arc::clone(&self.config),
            redraw: self.redraw.clone(),
            modpack_debounce: Arc::clone(&self.modpack_debounce),
            content_debounce: Arc::clone(&self.content_debounce),
        }
    }
}

impl<H: HostApi> Launcher<H> {
    /// Built-in bundles plus whatever `config.locales_dir` holds.
    pub fn new(host: H, config: UiConfig) -> UiResult<Self> {
        let mut bundles = ResourceBundles::builtin()?;
        if let Some(dir) = &config.locales_dir {
            match bundles.load_dir(dir) {
                Ok(count) => info!("Loaded {} locale bundle(s) from {:?}", count, dir),
                Err(err) => warn!("Could not read locales from {:?}: {}", dir, err),
            }
        }
        Ok(Self::with_bundles(host, config, bundles))
    }

    pub fn with_bundles(host: H, config: UiConfig, bundles: ResourceBundles) -> Self {
        let localizer = Localizer::new(bundles, config.default_language.clone());
        let state = ViewState::new(localizer, config.page_size);
        let (redraw, _) = broadcast::channel(REDRAW_CAPACITY);
        let debounce = config.debounce();

        Self {
            host: Arc::new(host),
            state: Arc::new(Mutex::new(state)),
            config: Arc::new(config),
            redraw,
            modpack_debounce: Arc::new(Mutex::new(Debouncer::new(debounce))),
            content_debounce: Arc::new(Mutex::new(Debouncer::new(debounce))),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Redraw notifications, one per affected region.
    pub fn subscribe(&self) -> broadcast::Receiver<Region> {
        self.redraw.subscribe()
    }

    fn emit(&self, region: Region) {
        // No subscribers is fine: nothing is on screen yet.
        let _ = self.redraw.send(region);
    }

    fn emit_all(&self, regions: impl IntoIterator<Item = Region>) {
        for region in regions {
            self.emit(region);
        }
    }

    /// Run `f` against the current state.
    pub async fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        let state = self.state.lock().await;
        f(&state)
    }

    /// Render the whole window.
    pub async fn snapshot(&self) -> AppView {
        let state = self.state.lock().await;
        render::render_app(&state, &self.config.app_version_label)
    }

    // ── Lifecycle ───────────────────────────────────────

    pub async fn handle_event(&self, event: HostEvent) {
        match event {
            HostEvent::Ready => self.initialize().await,
            HostEvent::StatusUpdate(key) => {
                self.state.lock().await.set_status(key);
                self.emit(Region::Status);
            }
            HostEvent::ProgressUpdate(percent) => {
                self.state.lock().await.set_progress(percent);
                self.emit(Region::Progress);
            }
            HostEvent::Loading(loading) => {
                self.state.lock().await.set_loading(loading);
                self.emit(Region::Progress);
            }
            HostEvent::ConsoleAppend(line) => {
                self.state.lock().await.console.push(line);
                self.emit(Region::Console);
            }
            HostEvent::GameClosed => {
                info!("Game closed");
                self.state.lock().await.game_closed();
                self.emit_all([Region::Status, Region::Progress]);
            }
        }
    }

    /// Initial load. Only the first call does anything.
    pub async fn initialize(&self) {
        {
            let mut state = self.state.lock().await;
            if state.initialized {
                debug!("Ignoring repeated ready signal");
                return;
            }
            state.initialized = true;
        }

        match self.host.get_init_data().await {
            Ok(data) => {
                let language = if data.config.language.is_empty() {
                    self.config.default_language.clone()
                } else {
                    data.config.language.clone()
                };
                {
                    let mut state = self.state.lock().await;
                    info!(
                        "Loaded {} instance(s), {} account(s)",
                        data.instances.len(),
                        data.accounts.len()
                    );
                    state.instances = data.instances;
                    state.set_accounts(data.accounts, data.current_account);
                    state.settings = data.config;
                }
                self.emit_all([Region::Instances, Region::Accounts, Region::Settings]);
                self.set_language(&language).await;
            }
            Err(err) => {
                error!("Failed to load initial data: {}", err);
                self.alert_error(&err).await;
            }
        }

        let versions = match self.host.get_mc_versions().await {
            Ok(versions) => versions,
            Err(err) => {
                warn!("Failed to load game versions: {}", err);
                Vec::new()
            }
        };
        {
            let mut state = self.state.lock().await;
            if let Some(first) = versions.first() {
                state.select_version(first);
            }
            state.versions = versions;
        }
        self.emit_all([
            Region::ModpackFilter,
            Region::Loaders,
            Region::Versions,
            Region::CreateForm,
        ]);
    }

    // ── Localization ────────────────────────────────────

    /// Switch the interface language. Unknown codes are silently ignored.
    pub async fn set_language(&self, code: &str) -> bool {
        {
            let mut state = self.state.lock().await;
            if !state.localizer.set_language(code) {
                return false;
            }
            let ViewState {
                localizer, texts, ..
            } = &mut *state;
            texts.refresh(localizer);
        }
        info!("Language set to '{}'", code);
        self.emit_all([Region::AnnotatedText, Region::LanguagePicker]);
        true
    }

    /// Language chosen from the picker: switch and close the dropdown.
    pub async fn pick_language(&self, code: &str) -> bool {
        let changed = self.set_language(code).await;
        self.state.lock().await.close_dropdowns();
        self.emit(Region::Dropdowns);
        changed
    }

    pub async fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.state.lock().await.tr(key, params)
    }

    pub async fn register_text(&self, element_id: &str, key: &str, target: TextTarget) {
        let mut state = self.state.lock().await;
        let ViewState {
            localizer, texts, ..
        } = &mut *state;
        texts.register(element_id, key, target, localizer);
    }

    /// Rewrite every annotated element with its current translation.
    pub async fn refresh_annotated_text(&self) {
        {
            let mut state = self.state.lock().await;
            let ViewState {
                localizer, texts, ..
            } = &mut *state;
            texts.refresh(localizer);
        }
        self.emit(Region::AnnotatedText);
    }

    // ── Dropdowns, modals, tabs ─────────────────────────

    pub async fn toggle_dropdown(&self, id: DropdownId) {
        self.state.lock().await.toggle_dropdown(id);
        self.emit(Region::Dropdowns);
    }

    /// Any click: outside every dropdown container closes all dropdowns.
    pub async fn handle_click(&self, inside_dropdown_container: bool) {
        if inside_dropdown_container {
            return;
        }
        let mut state = self.state.lock().await;
        if state.open_dropdown.is_some() {
            state.close_dropdowns();
            drop(state);
            self.emit(Region::Dropdowns);
        }
    }

    pub async fn open_modal(&self, id: ModalId) {
        self.state.lock().await.open_modal(id);
        self.emit_all([Region::Overlay, Region::Tabs]);
    }

    pub async fn close_all_modals(&self) {
        self.state.lock().await.close_all_modals();
        self.emit(Region::Overlay);
    }

    /// Switching to the modpack tab starts a fresh modpack search.
    pub async fn switch_create_tab(&self, tab: CreateTab) {
        self.state.lock().await.switch_create_tab(tab);
        self.emit(Region::Tabs);
        if tab == CreateTab::Modpack {
            self.search_modpacks(false).await;
        }
    }

    pub async fn show_import_form(&self) {
        self.state.lock().await.import_form.visible = true;
        self.emit(Region::Tabs);
    }

    pub async fn hide_import_form(&self) {
        self.state.lock().await.import_form.visible = false;
        self.emit(Region::Tabs);
    }

    pub async fn switch_auth_tab(&self, tab: AuthTab) {
        self.state.lock().await.auth_tab = tab;
        self.emit(Region::Tabs);
    }

    /// Content tabs refresh their installed-items list on open.
    pub async fn switch_instance_tab(&self, tab: InstanceTab) {
        self.state.lock().await.instance_tab = tab;
        self.emit(Region::Tabs);
        if let InstanceTab::Content(kind) = tab {
            self.refresh_installed_items(kind).await;
        }
    }

    // ── Game ────────────────────────────────────────────

    pub async fn launch_game(&self) {
        {
            let mut state = self.state.lock().await;
            state.status.launch_enabled = false;
            state.console.clear();
        }
        self.emit_all([Region::Status, Region::Console]);

        if let Err(err) = self.host.launch_game().await {
            error!("Launch failed: {}", err);
            self.state.lock().await.game_closed();
            self.emit_all([Region::Status, Region::Progress]);
            self.alert_error(&err).await;
        }
    }
}
