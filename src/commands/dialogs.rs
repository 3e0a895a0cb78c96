// ─── Dialogs ───
// Awaitable alert / confirm / prompt. The state lock is released before the
// caller waits on the user.

use tracing::debug;

use super::Launcher;
use crate::core::error::UiError;
use crate::core::host::HostApi;
use crate::core::state::ModalId;
use crate::core::view::Region;

impl<H: HostApi> Launcher<H> {
    /// Resolves once the user dismisses the alert.
    pub async fn show_alert(&self, message: &str) {
        let rx = {
            let mut state = self.state.lock().await;
            state.open_modal(ModalId::Alert);
            state.dialogs.open_alert(message)
        };
        self.emit(Region::Overlay);
        if rx.await.is_err() {
            debug!("Alert replaced before it was dismissed");
        }
    }

    /// `true` only when the user accepts. A replaced dialog counts as declined.
    pub async fn show_confirm(&self, message: &str) -> bool {
        let rx = {
            let mut state = self.state.lock().await;
            state.open_modal(ModalId::Confirm);
            state.dialogs.open_confirm(message)
        };
        self.emit(Region::Overlay);
        rx.await.unwrap_or(false)
    }

    /// The entered text, or `None` when cancelled.
    pub async fn show_prompt(&self, message: &str, default_value: &str) -> Option<String> {
        let rx = {
            let mut state = self.state.lock().await;
            state.open_modal(ModalId::Prompt);
            state.dialogs.open_prompt(message, default_value)
        };
        self.emit(Region::Overlay);
        rx.await.ok().flatten()
    }

    pub async fn close_alert(&self) {
        {
            let mut state = self.state.lock().await;
            state.dialogs.close_alert();
            state.close_all_modals();
        }
        self.emit(Region::Overlay);
    }

    pub async fn close_confirm(&self, result: bool) {
        {
            let mut state = self.state.lock().await;
            state.dialogs.close_confirm(result);
            state.close_all_modals();
        }
        self.emit(Region::Overlay);
    }

    pub async fn set_prompt_input(&self, value: &str) {
        self.state.lock().await.dialogs.set_prompt_input(value);
        self.emit(Region::Overlay);
    }

    /// `accepted == false` resolves the prompt with `None`.
    pub async fn close_prompt(&self, accepted: bool) {
        {
            let mut state = self.state.lock().await;
            state.dialogs.close_prompt(accepted);
            state.close_all_modals();
        }
        self.emit(Region::Overlay);
    }

    /// Alert with a translated message.
    pub(crate) async fn alert_key(&self, key: &str, params: &[(&str, &str)]) {
        let message = self.translate(key, params).await;
        self.show_alert(&message).await;
    }

    /// Generic "Error: ..." alert for a failed host call.
    pub(crate) async fn alert_error(&self, err: &UiError) {
        let detail = err.to_string();
        self.alert_key("error_generic", &[("error", detail.as_str())]).await;
    }
}
