// ─── Dialog Bridge ───
// Alert / confirm / prompt as awaitable calls. Each kind has one pending
// slot: opening a second dialog of the same kind before the first resolves
// replaces the slot, and the replaced caller resolves as cancelled.

use serde::Serialize;
use tokio::sync::oneshot;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogKind {
    Alert,
    Confirm,
    Prompt,
}

/// What the dialog currently on screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogContent {
    pub kind: DialogKind,
    pub message: String,
    /// Prompt input value; empty for alert and confirm.
    pub input: String,
}

#[derive(Debug, Default)]
pub struct DialogBridge {
    alert: Option<oneshot::Sender<()>>,
    confirm: Option<oneshot::Sender<bool>>,
    prompt: Option<oneshot::Sender<Option<String>>>,
    content: Option<DialogContent>,
}

fn replace_slot<T>(slot: &mut Option<oneshot::Sender<T>>, kind: DialogKind) -> oneshot::Receiver<T> {
    let (tx, rx) = oneshot::channel();
    if slot.replace(tx).is_some() {
        debug!("{:?} dialog reopened before the previous one resolved", kind);
    }
    rx
}

impl DialogBridge {
    pub fn open_alert(&mut self, message: &str) -> oneshot::Receiver<()> {
        self.show(DialogKind::Alert, message, "");
        replace_slot(&mut self.alert, DialogKind::Alert)
    }

    pub fn open_confirm(&mut self, message: &str) -> oneshot::Receiver<bool> {
        self.show(DialogKind::Confirm, message, "");
        replace_slot(&mut self.confirm, DialogKind::Confirm)
    }

    pub fn open_prompt(&mut self, message: &str, default_value: &str) -> oneshot::Receiver<Option<String>> {
        self.show(DialogKind::Prompt, message, default_value);
        replace_slot(&mut self.prompt, DialogKind::Prompt)
    }

    fn show(&mut self, kind: DialogKind, message: &str, input: &str) {
        self.content = Some(DialogContent {
            kind,
            message: message.to_string(),
            input: input.to_string(),
        });
    }

    pub fn set_prompt_input(&mut self, value: &str) {
        if let Some(content) = self.content.as_mut().filter(|c| c.kind == DialogKind::Prompt) {
            content.input = value.to_string();
        }
    }

    /// Resolve the pending alert. Returns whether a caller was waiting.
    pub fn close_alert(&mut self) -> bool {
        self.hide(DialogKind::Alert);
        self.alert.take().map(|tx| tx.send(()).is_ok()).unwrap_or(false)
    }

    pub fn close_confirm(&mut self, result: bool) -> bool {
        self.hide(DialogKind::Confirm);
        self.confirm
            .take()
            .map(|tx| tx.send(result).is_ok())
            .unwrap_or(false)
    }

    /// `accepted == false` resolves the prompt with `None`.
    pub fn close_prompt(&mut self, accepted: bool) -> bool {
        let input = match self.content.take() {
            Some(content) if content.kind == DialogKind::Prompt => content.input,
            other => {
                self.content = other;
                String::new()
            }
        };
        let value = accepted.then_some(input);
        self.prompt
            .take()
            .map(|tx| tx.send(value).is_ok())
            .unwrap_or(false)
    }

    /// Resolve every pending dialog as dismissed: alerts return, confirms
    /// decline and prompts cancel. Returns how many callers were waiting.
    pub fn cancel_all(&mut self) -> usize {
        self.content = None;
        let alert = self.alert.take().map(|tx| tx.send(()).is_ok());
        let confirm = self.confirm.take().map(|tx| tx.send(false).is_ok());
        let prompt = self.prompt.take().map(|tx| tx.send(None).is_ok());
        [alert, confirm, prompt]
            .into_iter()
            .filter(|resolved| *resolved == Some(true))
            .count()
    }

    fn hide(&mut self, kind: DialogKind) {
        if self.content.as_ref().map(|c| c.kind) == Some(kind) {
            self.content = None;
        }
    }

    pub fn content(&self) -> Option<&DialogContent> {
        self.content.as_ref()
    }

    pub fn pending(&self) -> Option<DialogKind> {
        self.content.as_ref().map(|c| c.kind)
    }
}
