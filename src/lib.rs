mod commands;
pub mod core;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

pub use crate::commands::Launcher;
pub use crate::core::error::{UiError, UiResult};

static TRACING: Once = Once::new();

/// Install the structured logging subscriber. Safe to call more than once;
/// a subscriber installed elsewhere is left in place.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let installed = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,folia_ui=debug")),
            )
            .try_init()
            .is_ok();

        if installed {
            tracing::info!("FoliaLauncher front end starting...");
        }
    });
}
