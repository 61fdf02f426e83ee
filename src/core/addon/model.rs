use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Release channel of a file — strongly typed, with a pass-through for codes
/// the service may add later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum FileType {
    Release,
    Beta,
    Alpha,
    Unrecognized(i64),
}

impl From<i64> for FileType {
    fn from(code: i64) -> Self {
        match code {
            1 => FileType::Release,
            2 => FileType::Beta,
            3 => FileType::Alpha,
            other => FileType::Unrecognized(other),
        }
    }
}

impl From<FileType> for i64 {
    fn from(file_type: FileType) -> Self {
        match file_type {
            FileType::Release => 1,
            FileType::Beta => 2,
            FileType::Alpha => 3,
            FileType::Unrecognized(code) => code,
        }
    }
}

impl FileType {
    pub fn is_stable(&self) -> bool {
        matches!(self, FileType::Release)
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileType::Release => write!(f, "release"),
            FileType::Beta => write!(f, "beta"),
            FileType::Alpha => write!(f, "alpha"),
            FileType::Unrecognized(code) => write!(f, "unknown({})", code),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum DependencyKind {
    Required,
    Optional,
    Unrecognized(i64),
}

impl From<i64> for DependencyKind {
    fn from(code: i64) -> Self {
        match code {
            1 => DependencyKind::Required,
            2 => DependencyKind::Optional,
            other => DependencyKind::Unrecognized(other),
        }
    }
}

impl From<DependencyKind> for i64 {
    fn from(kind: DependencyKind) -> Self {
        match kind {
            DependencyKind::Required => 1,
            DependencyKind::Optional => 2,
            DependencyKind::Unrecognized(code) => code,
        }
    }
}

impl std::fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DependencyKind::Required => write!(f, "required"),
            DependencyKind::Optional => write!(f, "optional"),
            DependencyKind::Unrecognized(code) => write!(f, "unknown({})", code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    #[serde(rename = "addonId")]
    pub mod_id: u32,
    #[serde(rename = "type")]
    pub kind: DependencyKind,
}

/// One downloadable file of an addon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModFile {
    pub id: u32,
    #[serde(rename = "fileNameOnDisk")]
    pub disk_file_name: String,
    /// Human-facing name; the service calls this `fileName`.
    #[serde(rename = "fileName")]
    pub display_file_name: String,
    #[serde(rename = "fileDate")]
    pub release_date: DateTime<Utc>,
    #[serde(rename = "fileLength")]
    pub length_bytes: u64,
    #[serde(rename = "releaseType")]
    pub release_type: FileType,
    #[serde(rename = "gameVersion", default)]
    pub game_versions: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl ModFile {
    pub fn supports(&self, game_version: &str) -> bool {
        self.game_versions.iter().any(|v| v == game_version)
    }

    pub fn required_dependencies(&self) -> impl Iterator<Item = &Dependency> {
        self.dependencies
            .iter()
            .filter(|d| d.kind == DependencyKind::Required)
    }

    pub fn optional_dependencies(&self) -> impl Iterator<Item = &Dependency> {
        self.dependencies
            .iter()
            .filter(|d| d.kind == DependencyKind::Optional)
    }
}

/// The file the service considers latest for one game version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameVersionEntry {
    #[serde(rename = "gameVersion")]
    pub game_version: String,
    #[serde(rename = "projectFileId")]
    pub file_id: u32,
    #[serde(rename = "projectFileName")]
    pub file_display_name: String,
    #[serde(rename = "fileType")]
    pub release_type: FileType,
}

/// Addon record as served by the metadata service (a subset of its fields).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModRecord {
    pub name: String,
    pub slug: String,
    pub id: u32,
    #[serde(rename = "latestFiles", default)]
    pub latest_files: Vec<ModFile>,
    #[serde(rename = "gameVersionLatestFiles", default)]
    pub game_version_index: Vec<GameVersionEntry>,
}

impl ModRecord {
    /// Index entry for `game_version`. When the service lists the version more
    /// than once, the first entry is returned.
    pub fn latest_file_for(&self, game_version: &str) -> Option<&GameVersionEntry> {
        self.game_version_index
            .iter()
            .find(|e| e.game_version == game_version)
    }

    pub fn file(&self, file_id: u32) -> Option<&ModFile> {
        self.latest_files.iter().find(|f| f.id == file_id)
    }

    pub fn files_for<'a>(&'a self, game_version: &'a str) -> impl Iterator<Item = &'a ModFile> {
        self.latest_files
            .iter()
            .filter(move |f| f.supports(game_version))
    }
}

/// Error envelope the metadata service mixes into its responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RemoteErrorEnvelope {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error: Option<bool>,
    #[serde(default)]
    pub status: Option<i64>,
}

impl RemoteErrorEnvelope {
    pub fn is_error(&self) -> bool {
        self.error == Some(true)
    }
}
