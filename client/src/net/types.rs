//! Wire DTOs for the article/auth REST backend.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON; field renames live here so pages and
//! state modules only ever see snake_case Rust names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `GET /api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend user identifier.
    pub id: i64,
    /// Public display name, also shown as article author.
    pub username: String,
    /// Login identifier.
    pub email: String,
}

/// Article topic used for filtering and badges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ArticleCategory {
    #[default]
    Tech,
    Ai,
    Backend,
    Frontend,
    Devops,
    Other,
}

impl ArticleCategory {
    /// Every category in display order.
    pub const ALL: [ArticleCategory; 6] = [
        ArticleCategory::Tech,
        ArticleCategory::Ai,
        ArticleCategory::Backend,
        ArticleCategory::Frontend,
        ArticleCategory::Devops,
        ArticleCategory::Other,
    ];

    /// Wire name, also used as the `<option>` value.
    pub fn as_str(self) -> &'static str {
        match self {
            ArticleCategory::Tech => "TECH",
            ArticleCategory::Ai => "AI",
            ArticleCategory::Backend => "BACKEND",
            ArticleCategory::Frontend => "FRONTEND",
            ArticleCategory::Devops => "DEVOPS",
            ArticleCategory::Other => "OTHER",
        }
    }

    /// Parse a wire name. Returns `None` for unknown or empty input.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

/// A published article.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    /// AI-generated summary, filled in by the backend on save.
    pub summary: Option<String>,
    pub category: ArticleCategory,
    /// Article body as HTML.
    pub content: String,
    /// Comma-separated tag list.
    pub tags: Option<String>,
    pub author_username: String,
    pub author_id: i64,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Create/update payload for `POST /api/articles` and `PUT /api/articles/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRequest {
    pub title: String,
    pub category: ArticleCategory,
    pub content: String,
    pub tags: String,
}

/// Spring-style page envelope used by list endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Serialize)]
pub(crate) struct SignupRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub token: String,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImproveRequest<'a> {
    pub current_title: &'a str,
    pub content: &'a str,
}

/// Result of `POST /api/ai/improve`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Improvement {
    /// Suggested title; empty or absent means keep the current one.
    #[serde(default)]
    pub improved_title: Option<String>,
    pub improved_content: String,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Serialize)]
pub(crate) struct TagsRequest<'a> {
    pub content: &'a str,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
pub(crate) struct TagsResponse {
    #[serde(default)]
    pub tags: Vec<String>,
}
