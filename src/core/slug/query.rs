use serde::{Deserialize, Serialize};

use crate::core::error::{CurseError, CurseResult};

/// GraphQL document for slug lookups. The slug only ever travels in
/// `variables`.
const SLUG_QUERY: &str = r#"
query getIDFromSlug($slug: String) {
	addons(slug: $slug) {
		id
	}
}
"#;

/// Request body sent to the GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugQuery {
    pub query: &'static str,
    pub variables: SlugVariables,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugVariables {
    pub slug: String,
}

impl SlugQuery {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            query: SLUG_QUERY,
            variables: SlugVariables { slug: slug.into() },
        }
    }

    pub fn slug(&self) -> &str {
        &self.variables.slug
    }
}

/// Raw GraphQL response. Every field is optional: error responses carry
/// `exception`/`message` and may omit or null out `data`.
#[derive(Debug, Default, Deserialize)]
pub struct SlugResponse {
    #[serde(default)]
    pub data: Option<SlugData>,
    #[serde(default)]
    pub exception: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub stacktrace: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SlugData {
    #[serde(default)]
    pub addons: Option<Vec<AddonRef>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AddonRef {
    pub id: u32,
}

/// The single outcome a slug response stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugResult {
    Found(u32),
    RemoteError {
        message: String,
        stacktrace: Vec<String>,
    },
    NotFound,
}

impl SlugResponse {
    /// Collapse the response into one outcome. A reported error wins over any
    /// addons in the same payload; the first addon wins over later ones.
    pub fn into_result(self) -> SlugResult {
        let exception = self.exception.filter(|s| !s.is_empty());
        let message = self.message.filter(|s| !s.is_empty());

        if exception.is_some() || message.is_some() {
            return SlugResult::RemoteError {
                message: message.or(exception).unwrap_or_default(),
                stacktrace: self.stacktrace.unwrap_or_default(),
            };
        }

        match self
            .data
            .and_then(|d| d.addons)
            .and_then(|addons| addons.first().copied())
        {
            Some(addon) => SlugResult::Found(addon.id),
            None => SlugResult::NotFound,
        }
    }
}

impl SlugResult {
    pub fn into_id(self, slug: &str) -> CurseResult<u32> {
        match self {
            SlugResult::Found(id) => Ok(id),
            SlugResult::RemoteError { message, .. } => Err(CurseError::RemoteApplication(message)),
            SlugResult::NotFound => Err(CurseError::NotFound {
                slug: slug.to_string(),
            }),
        }
    }
}
