mod fetcher;
mod model;

pub use fetcher::{parse_addon_response, MetadataFetcher};
pub use model::{
    Dependency, DependencyKind, FileType, GameVersionEntry, ModFile, ModRecord,
    RemoteErrorEnvelope,
};
