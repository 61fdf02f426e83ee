// ─── Catalog Core ───
// Slug resolution and addon metadata for the CurseForge catalog proxies.
//
// Architecture:
//   core/
//     slug/    — GraphQL slug → addon id
//     addon/   — REST addon record + file/version model
//     client   — CurseClient, AddonCatalog trait, blocking front
//     config   — client identity + endpoints
//     http     — shared reqwest client + lenient JSON decoding

pub mod addon;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod slug;
