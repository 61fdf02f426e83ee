use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use tracing::debug;

use super::query::{SlugQuery, SlugResponse};
use crate::core::config::ClientConfig;
use crate::core::error::CurseResult;
use crate::core::http::decode_first;

/// Resolves addon slugs to numeric ids through the GraphQL proxy.
pub struct SlugResolver {
    client: Client,
    endpoint: String,
    user_agent: String,
}

impl SlugResolver {
    pub fn new(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            endpoint: config.graphql_endpoint.clone(),
            user_agent: config.user_agent.clone(),
        }
    }

    /// One POST, no retries. The slug is not validated locally.
    pub async fn resolve(&self, slug: &str) -> CurseResult<u32> {
        let request = SlugQuery::new(slug);
        debug!("Resolving slug {:?} via {}", slug, self.endpoint);

        let body = self
            .client
            .post(&self.endpoint)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(&request)?)
            .send()
            .await?
            .bytes()
            .await?;

        let outcome = decode_first::<SlugResponse>(&body)?.into_result();
        debug!("Slug {:?} resolved to {:?}", slug, outcome);

        outcome.into_id(request.slug())
    }
}
