use async_trait::async_trait;
use reqwest::Client;
use tokio::runtime::{Builder, Runtime};
use tracing::info;

use crate::core::addon::{MetadataFetcher, ModRecord};
use crate::core::config::ClientConfig;
use crate::core::error::{CurseError, CurseResult};
use crate::core::http::build_http_client;
use crate::core::slug::SlugResolver;

/// What callers need from an addon catalog.
#[async_trait]
pub trait AddonCatalog: Send + Sync {
    async fn resolve_slug_to_id(&self, slug: &str) -> CurseResult<u32>;

    async fn fetch_mod_record(&self, id: u32) -> CurseResult<ModRecord>;

    /// Resolve, then fetch. Stops at the first failure.
    async fn lookup(&self, slug: &str) -> CurseResult<ModRecord> {
        let id = self.resolve_slug_to_id(slug).await?;
        self.fetch_mod_record(id).await
    }
}

/// Catalog backed by the GraphQL slug proxy and the REST metadata service.
///
/// Holds no per-call state; share it freely across tasks.
pub struct CurseClient {
    resolver: SlugResolver,
    fetcher: MetadataFetcher,
    config: ClientConfig,
}

impl CurseClient {
    pub fn new(config: ClientConfig) -> CurseResult<Self> {
        let client = build_http_client(&config)?;
        Ok(Self::with_http_client(client, config))
    }

    /// Reuse a host-provided `reqwest::Client`. Identity headers still come
    /// from `config`.
    pub fn with_http_client(client: Client, config: ClientConfig) -> Self {
        Self {
            resolver: SlugResolver::new(client.clone(), &config),
            fetcher: MetadataFetcher::new(client, &config),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl AddonCatalog for CurseClient {
    async fn resolve_slug_to_id(&self, slug: &str) -> CurseResult<u32> {
        self.resolver.resolve(slug).await
    }

    async fn fetch_mod_record(&self, id: u32) -> CurseResult<ModRecord> {
        self.fetcher.fetch(id).await
    }

    async fn lookup(&self, slug: &str) -> CurseResult<ModRecord> {
        let id = self.resolve_slug_to_id(slug).await?;
        info!("Resolved {} to addon {}", slug, id);
        self.fetch_mod_record(id).await
    }
}

/// Synchronous front for hosts without an async runtime. Each call blocks the
/// current thread for exactly one round trip (two for `lookup`).
///
/// Must not be used from inside a tokio runtime.
pub struct BlockingCurseClient {
    inner: CurseClient,
    runtime: Runtime,
}

impl BlockingCurseClient {
    pub fn new(config: ClientConfig) -> CurseResult<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(CurseError::Runtime)?;
        Ok(Self {
            inner: CurseClient::new(config)?,
            runtime,
        })
    }

    pub fn resolve_slug_to_id(&self, slug: &str) -> CurseResult<u32> {
        self.runtime.block_on(self.inner.resolve_slug_to_id(slug))
    }

    pub fn fetch_mod_record(&self, id: u32) -> CurseResult<ModRecord> {
        self.runtime.block_on(self.inner.fetch_mod_record(id))
    }

    pub fn lookup(&self, slug: &str) -> CurseResult<ModRecord> {
        self.runtime.block_on(self.inner.lookup(slug))
    }
}
