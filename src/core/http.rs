use std::time::Duration;

use reqwest::header::HeaderValue;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::core::config::ClientConfig;
use crate::core::error::{CurseError, CurseResult};

/// Shared client for both operations. Requests still set their own
/// `Accept` and `User-Agent`, so a host-supplied client works the same.
pub fn build_http_client(config: &ClientConfig) -> CurseResult<Client> {
    let user_agent = HeaderValue::from_str(&config.user_agent)
        .map_err(|_| CurseError::Config(format!("invalid user agent {:?}", config.user_agent)))?;

    let mut builder = Client::builder().user_agent(user_agent);
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    Ok(builder.build()?)
}

/// Decode the first complete JSON value in `body`.
///
/// Anything after that value (a trailing newline, or junk) is ignored. A body
/// with no complete value, including an empty one, is a decode error.
pub fn decode_first<T: DeserializeOwned>(body: &[u8]) -> CurseResult<T> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<T>();
    match values.next() {
        Some(value) => Ok(value?),
        // Only whitespace: let the strict parser produce the EOF error.
        None => Ok(serde_json::from_slice(body)?),
    }
}
