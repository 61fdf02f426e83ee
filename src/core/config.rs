// ─── Client Configuration ───
// Identity and endpoints shared by both catalog operations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{CurseError, CurseResult};

pub const DEFAULT_USER_AGENT: &str = "curse-meta/0.1.0";
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "https://curse.nikky.moe/graphql";
pub const DEFAULT_METADATA_ENDPOINT: &str = "https://staging_cursemeta.dries007.net";

const CONFIG_DIR_NAME: &str = "curse-meta";
const CONFIG_FILE: &str = "client.json";

const ENV_USER_AGENT: &str = "CURSE_META_USER_AGENT";
const ENV_GRAPHQL_URL: &str = "CURSE_META_GRAPHQL_URL";
const ENV_METADATA_URL: &str = "CURSE_META_METADATA_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Sent as `User-Agent` on every request.
    pub user_agent: String,
    /// Full URL of the GraphQL endpoint used for slug lookups.
    pub graphql_endpoint: String,
    /// Base URL of the REST metadata service (without `/api/v3/...`).
    pub metadata_endpoint: String,
    /// Optional whole-request timeout. `None` leaves deadlines to the caller.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            graphql_endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_string(),
            metadata_endpoint: DEFAULT_METADATA_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_graphql_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.graphql_endpoint = endpoint.into();
        self
    }

    pub fn with_metadata_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.metadata_endpoint = endpoint.into();
        self
    }

    /// URL of the addon record for `id`.
    pub fn addon_url(&self, id: u32) -> String {
        format!(
            "{}/api/v3/direct/addon/{}",
            self.metadata_endpoint.trim_end_matches('/'),
            id
        )
    }

    /// Read a JSON config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> CurseResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| CurseError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Like [`ClientConfig::load`], but any failure yields the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    pub fn save(&self, path: &Path) -> CurseResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CurseError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| CurseError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Apply `CURSE_META_*` environment overrides on top of this config.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty(ENV_USER_AGENT) {
            self.user_agent = v;
        }
        if let Some(v) = non_empty(ENV_GRAPHQL_URL) {
            self.graphql_endpoint = v;
        }
        if let Some(v) = non_empty(ENV_METADATA_URL) {
            self.metadata_endpoint = v;
        }
        self
    }
}

/// `<config dir>/curse-meta/client.json`, falling back to the working directory.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE)
}
