use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the launcher front end.
/// Every fallible operation returns `Result<T, UiError>`.
#[derive(Debug, Error)]
pub enum UiError {
    // ── Host ────────────────────────────────────────────
    /// A host call was rejected. The message is shown to the user as-is.
    #[error("{0}")]
    Host(String),

    // ── Validation ──────────────────────────────────────
    #[error("{0}")]
    Validation(String),

    #[error("Unknown content kind: {0}")]
    UnknownContentKind(String),

    // ── Network ─────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog request failed for {url}: HTTP {status}")]
    CatalogStatus { url: String, status: u16 },

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Generic ─────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type UiResult<T> = Result<T, UiError>;

impl From<std::io::Error> for UiError {
    fn from(source: std::io::Error) -> Self {
        UiError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}

// ── Serialization for front-end bridges ─────────────────
// Errors cross the IPC boundary as their display string.
impl serde::Serialize for UiError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_errors_display_raw_message() {
        let err = UiError::Host("disk full".into());
        assert_eq!(err.to_string(), "disk full");
        assert_eq!(serde_json::to_string(&err).unwrap(), "\"disk full\"");
    }
}
