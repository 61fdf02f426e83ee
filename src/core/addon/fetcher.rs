use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::model::{ModRecord, RemoteErrorEnvelope};
use crate::core::config::ClientConfig;
use crate::core::error::{CurseError, CurseResult};
use crate::core::http::decode_first;

/// Fetches addon records from the metadata REST service.
pub struct MetadataFetcher {
    client: Client,
    config: ClientConfig,
}

impl MetadataFetcher {
    pub fn new(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            config: config.clone(),
        }
    }

    /// One GET, no retries. The HTTP status is not consulted: the service
    /// reports faults through the error envelope in the body.
    pub async fn fetch(&self, id: u32) -> CurseResult<ModRecord> {
        let url = self.config.addon_url(id);
        debug!("Fetching addon metadata: {}", url);

        let body = self
            .client
            .get(&url)
            .header(USER_AGENT, &self.config.user_agent)
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .bytes()
            .await?;

        let record = parse_addon_response(&body, id)?;
        debug!(
            "Loaded addon {} ({}): {} files, {} game versions",
            record.id,
            record.slug,
            record.latest_files.len(),
            record.game_version_index.len()
        );
        Ok(record)
    }
}

/// Decode a metadata payload: error envelope first, then the record, then the
/// id check against what was asked for.
pub fn parse_addon_response(body: &[u8], requested: u32) -> CurseResult<ModRecord> {
    let payload: Value = decode_first(body)?;

    let envelope = RemoteErrorEnvelope::deserialize(&payload)?;
    if envelope.is_error() {
        return Err(CurseError::RemoteApplication(
            envelope.description.unwrap_or_default(),
        ));
    }

    let record = ModRecord::deserialize(payload)?;
    if record.id != requested {
        return Err(CurseError::Integrity {
            requested,
            received: record.id,
        });
    }

    Ok(record)
}
