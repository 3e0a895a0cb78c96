// ─── Accounts & Settings ───

use tracing::{error, info, warn};

use super::Launcher;
use crate::core::error::UiError;
use crate::core::host::{Account, HostApi};
use crate::core::state::UserSettings;
use crate::core::view::Region;

impl<H: HostApi> Launcher<H> {
    /// Switch the active account. The host is told first; on failure the
    /// header keeps showing the previous account.
    pub async fn select_account(&self, uuid: &str) {
        if let Err(err) = self.host.set_active_account(uuid).await {
            error!("Failed to switch account: {}", err);
            self.alert_error(&err).await;
            return;
        }
        {
            let mut state = self.state.lock().await;
            if !state.select_account(uuid) {
                warn!("Account {} is not in the account list", uuid);
            }
            state.close_dropdowns();
        }
        self.emit_all([Region::Accounts, Region::Dropdowns]);
    }

    pub async fn add_local_account(&self, username: &str) {
        let username = username.trim();
        if username.is_empty() {
            self.alert_key("enter_username", &[]).await;
            return;
        }
        match self.host.add_local_account(username).await {
            Ok(accounts) => {
                info!("Added offline account '{}'", username);
                self.accounts_changed(accounts).await;
            }
            Err(err) => {
                error!("Failed to add account: {}", err);
                self.alert_error(&err).await;
            }
        }
    }

    pub async fn add_remote_account(&self, username: &str, password: &str) {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            self.alert_key("enter_credentials", &[]).await;
            return;
        }
        match self.host.add_remote_account(username, password).await {
            Ok(Some(accounts)) => {
                info!("Signed in as '{}'", username);
                self.accounts_changed(accounts).await;
            }
            Ok(None) => {
                warn!("Sign-in rejected for '{}'", username);
                self.alert_key("login_failed", &[]).await;
            }
            Err(err) => {
                error!("Failed to sign in: {}", err);
                self.alert_error(&err).await;
            }
        }
    }

    /// The newest account (last in the list) becomes current.
    async fn accounts_changed(&self, accounts: Vec<Account>) {
        {
            let mut state = self.state.lock().await;
            let current = accounts.last().cloned();
            state.set_accounts(accounts, current);
            state.close_all_modals();
        }
        self.emit_all([Region::Accounts, Region::Overlay]);
    }

    /// Persist java path and RAM together with the active language.
    pub async fn save_settings(&self, java_path: &str, ram: u32) {
        let settings = {
            let state = self.state.lock().await;
            UserSettings {
                java_path: java_path.trim().to_string(),
                ram,
                language: state.localizer.language().to_string(),
            }
        };
        match settings.validate() {
            Ok(()) => {}
            Err(UiError::Validation(key)) => {
                self.alert_key(&key, &[]).await;
                return;
            }
            Err(err) => {
                self.alert_error(&err).await;
                return;
            }
        }
        if let Err(err) = self.host.save_settings(&settings).await {
            error!("Failed to save settings: {}", err);
            self.alert_error(&err).await;
            return;
        }

        info!("Settings saved");
        {
            let mut state = self.state.lock().await;
            state.settings = settings;
            state.close_all_modals();
        }
        self.emit_all([Region::Settings, Region::Overlay]);
    }
}
