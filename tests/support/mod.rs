//! Scripted host for driving the coordinator without a real back end.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use folia_ui::core::content::ContentKind;
use folia_ui::core::dialog::DialogKind;
use folia_ui::core::host::{
    Account, ContentHit, HostApi, InitData, InstallOutcome, InstalledItem, ModpackHit,
    ModpackVersion,
};
use folia_ui::core::i18n::{Bundle, ResourceBundles};
use folia_ui::core::instance::{InstanceSummary, LoaderKind};
use folia_ui::core::state::{UiConfig, UserSettings};
use folia_ui::{Launcher, UiError, UiResult};

/// Every call is recorded as `name:arg:arg`. Queued responses are consumed in
/// order; an empty queue answers with an empty page or success.
pub struct FakeHost {
    calls: Mutex<Vec<String>>,
    pub init_data: Mutex<InitData>,
    pub versions: Mutex<Vec<String>>,
    pub modpack_pages: Mutex<VecDeque<UiResult<Vec<ModpackHit>>>>,
    pub content_pages: Mutex<VecDeque<UiResult<Vec<ContentHit>>>>,
    pub modpack_versions: Mutex<Vec<ModpackVersion>>,
    pub install_outcomes: Mutex<VecDeque<UiResult<InstallOutcome>>>,
    pub installed: Mutex<Vec<InstalledItem>>,
    pub job_results: Mutex<VecDeque<UiResult<bool>>>,
    pub remote_accounts: Mutex<Option<Vec<Account>>>,
    pub account_error: Mutex<Option<String>>,
    pub picked_file: Mutex<Option<String>>,
    /// When set, the next modpack search waits for this signal after
    /// taking its page.
    pub modpack_gate: tokio::sync::Mutex<Option<oneshot::Receiver<()>>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            init_data: Mutex::new(InitData {
                instances: Vec::new(),
                accounts: Vec::new(),
                current_account: None,
                config: UserSettings::default(),
            }),
            versions: Mutex::new(Vec::new()),
            modpack_pages: Mutex::new(VecDeque::new()),
            content_pages: Mutex::new(VecDeque::new()),
            modpack_versions: Mutex::new(Vec::new()),
            install_outcomes: Mutex::new(VecDeque::new()),
            installed: Mutex::new(Vec::new()),
            job_results: Mutex::new(VecDeque::new()),
            remote_accounts: Mutex::new(None),
            account_error: Mutex::new(None),
            picked_file: Mutex::new(None),
            modpack_gate: tokio::sync::Mutex::new(None),
        }
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    pub fn push_modpack_page(&self, page: UiResult<Vec<ModpackHit>>) {
        self.modpack_pages.lock().unwrap().push_back(page);
    }

    pub fn push_content_page(&self, page: UiResult<Vec<ContentHit>>) {
        self.content_pages.lock().unwrap().push_back(page);
    }
}

#[async_trait]
impl HostApi for FakeHost {
    async fn get_init_data(&self) -> UiResult<InitData> {
        self.record("get_init_data".into());
        Ok(self.init_data.lock().unwrap().clone())
    }

    async fn get_mc_versions(&self) -> UiResult<Vec<String>> {
        self.record("get_mc_versions".into());
        Ok(self.versions.lock().unwrap().clone())
    }

    async fn select_instance(&self, name: &str) -> UiResult<()> {
        self.record(format!("select_instance:{name}"));
        Ok(())
    }

    async fn create_instance(&self, name: &str, version: &str, loader: LoaderKind) -> UiResult<()> {
        self.record(format!("create_instance:{name}:{version}:{loader}"));
        self.init_data
            .lock()
            .unwrap()
            .instances
            .push(InstanceSummary::new(name, version, loader));
        Ok(())
    }

    async fn delete_current_instance(&self) -> UiResult<bool> {
        self.record("delete_current_instance".into());
        Ok(true)
    }

    async fn launch_game(&self) -> UiResult<()> {
        self.record("launch_game".into());
        Ok(())
    }

    async fn search_modpacks(
        &self,
        query: &str,
        version_filter: Option<&str>,
        offset: usize,
    ) -> UiResult<Vec<ModpackHit>> {
        self.record(format!(
            "search_modpacks:{query}:{}:{offset}",
            version_filter.unwrap_or("")
        ));
        let page = self
            .modpack_pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()));
        let gate = self.modpack_gate.lock().await.take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        page
    }

    async fn get_modpack_versions(&self, project_id: &str) -> UiResult<Vec<ModpackVersion>> {
        self.record(format!("get_modpack_versions:{project_id}"));
        Ok(self.modpack_versions.lock().unwrap().clone())
    }

    async fn install_modpack(
        &self,
        instance_name: &str,
        project_id: &str,
        version_id: &str,
    ) -> UiResult<bool> {
        self.record(format!("install_modpack:{instance_name}:{project_id}:{version_id}"));
        self.job_results.lock().unwrap().pop_front().unwrap_or(Ok(true))
    }

    async fn import_local_modpack(&self, instance_name: &str, file_path: &str) -> UiResult<bool> {
        self.record(format!("import_local_modpack:{instance_name}:{file_path}"));
        self.job_results.lock().unwrap().pop_front().unwrap_or(Ok(true))
    }

    async fn open_file_dialog(&self) -> UiResult<Option<String>> {
        self.record("open_file_dialog".into());
        Ok(self.picked_file.lock().unwrap().clone())
    }

    async fn search_content(
        &self,
        query: &str,
        instance: Option<&InstanceSummary>,
        offset: usize,
        kind: ContentKind,
    ) -> UiResult<Vec<ContentHit>> {
        let instance = instance.map(|i| i.name.as_str()).unwrap_or("");
        self.record(format!("search_content:{query}:{instance}:{offset}:{kind}"));
        self.content_pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn install_content(
        &self,
        instance: &InstanceSummary,
        project_id: &str,
    ) -> UiResult<InstallOutcome> {
        self.record(format!("install_content:{}:{project_id}", instance.name));
        self.install_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(InstallOutcome::installed(ContentKind::Mod)))
    }

    async fn get_installed_items(
        &self,
        kind: ContentKind,
        instance: &InstanceSummary,
    ) -> UiResult<Vec<InstalledItem>> {
        self.record(format!("get_installed_items:{kind}:{}", instance.name));
        Ok(self.installed.lock().unwrap().clone())
    }

    async fn delete_item(
        &self,
        kind: ContentKind,
        instance: &InstanceSummary,
        file_name: &str,
    ) -> UiResult<()> {
        self.record(format!("delete_item:{kind}:{}:{file_name}", instance.name));
        self.installed
            .lock()
            .unwrap()
            .retain(|item| item.file_name != file_name);
        Ok(())
    }

    async fn add_local_account(&self, username: &str) -> UiResult<Vec<Account>> {
        self.record(format!("add_local_account:{username}"));
        let mut data = self.init_data.lock().unwrap();
        data.accounts.push(account(&format!("uuid-{username}"), username));
        Ok(data.accounts.clone())
    }

    async fn add_remote_account(
        &self,
        username: &str,
        _password: &str,
    ) -> UiResult<Option<Vec<Account>>> {
        self.record(format!("add_remote_account:{username}"));
        Ok(self.remote_accounts.lock().unwrap().clone())
    }

    async fn set_active_account(&self, uuid: &str) -> UiResult<()> {
        self.record(format!("set_active_account:{uuid}"));
        match self.account_error.lock().unwrap().clone() {
            Some(message) => Err(UiError::Host(message)),
            None => Ok(()),
        }
    }

    async fn save_settings(&self, settings: &UserSettings) -> UiResult<()> {
        self.record(format!(
            "save_settings:{}:{}:{}",
            settings.java_path, settings.ram, settings.language
        ));
        Ok(())
    }
}

// ── Fixtures ────────────────────────────────────────────

pub fn instance(name: &str) -> InstanceSummary {
    InstanceSummary::new(name, "1.20.1", LoaderKind::Fabric)
}

pub fn account(uuid: &str, username: &str) -> Account {
    Account {
        uuid: uuid.into(),
        username: username.into(),
        kind: "local".into(),
    }
}

pub fn modpack_hits(start: usize, count: usize) -> Vec<ModpackHit> {
    (start..start + count)
        .map(|i| ModpackHit {
            project_id: format!("pack-{i}"),
            title: format!("Pack {i}"),
            author: "someone".into(),
            icon_url: None,
        })
        .collect()
}

pub fn content_hits(count: usize) -> Vec<ContentHit> {
    (0..count)
        .map(|i| ContentHit {
            project_id: format!("item-{i}"),
            title: format!("Item {i}"),
            description: String::new(),
            icon_url: None,
        })
        .collect()
}

/// Built-in English plus a small Spanish bundle.
pub fn bundles() -> ResourceBundles {
    let mut bundles = ResourceBundles::builtin().unwrap();
    bundles.insert(
        "es",
        Bundle::from_pairs([("ready", "Listo"), ("install", "Instalar")]),
    );
    bundles
}

pub fn launcher(host: FakeHost) -> Launcher<FakeHost> {
    Launcher::with_bundles(host, UiConfig::default(), bundles())
}

/// Let spawned work run until a dialog of `kind` is on screen.
pub async fn wait_for_dialog(launcher: &Launcher<FakeHost>, kind: DialogKind) {
    for _ in 0..1000 {
        if launcher.read(|s| s.dialogs.pending()).await == Some(kind) {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("{kind:?} dialog never appeared");
}

/// Message of the dialog currently on screen.
pub async fn dialog_message(launcher: &Launcher<FakeHost>) -> String {
    launcher
        .read(|s| s.dialogs.content().map(|c| c.message.clone()).unwrap_or_default())
        .await
}
