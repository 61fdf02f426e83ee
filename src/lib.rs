mod core;

use tracing_subscriber::EnvFilter;

pub use crate::core::addon::{
    parse_addon_response, Dependency, DependencyKind, FileType, GameVersionEntry, MetadataFetcher,
    ModFile, ModRecord, RemoteErrorEnvelope,
};
pub use crate::core::client::{AddonCatalog, BlockingCurseClient, CurseClient};
pub use crate::core::config::{default_config_path, ClientConfig};
pub use crate::core::error::{CurseError, CurseResult};
pub use crate::core::http::build_http_client;
pub use crate::core::slug::{SlugQuery, SlugResolver, SlugResponse, SlugResult};

/// Install a `tracing` subscriber for hosts that have none.
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,curse_meta=debug")),
        )
        .try_init();
}
