use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the catalog client.
/// Every operation returns `Result<T, CurseError>`.
#[derive(Debug, Error)]
pub enum CurseError {
    // ── Network ─────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    // ── JSON ────────────────────────────────────────────
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    // ── Remote service ──────────────────────────────────
    #[error("Catalog service reported an error: {0}")]
    RemoteApplication(String),

    #[error("Addon not found for slug {slug:?}")]
    NotFound { slug: String },

    // ── Integrity ───────────────────────────────────────
    #[error("Unexpected addon ID in catalog response: requested {requested}, received {received}")]
    Integrity { requested: u32, received: u32 },

    // ── Configuration ───────────────────────────────────
    #[error("Invalid client configuration: {0}")]
    Config(String),

    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to start blocking runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type CurseResult<T> = Result<T, CurseError>;

impl CurseError {
    /// True for faults the service reported itself, as opposed to
    /// transport or decoding failures on our side.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            CurseError::RemoteApplication(_) | CurseError::NotFound { .. }
        )
    }
}

// ── Serialization for host IPC ──────────────────────────
// Hosts forwarding errors over a bridge need them as plain strings.
impl serde::Serialize for CurseError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
