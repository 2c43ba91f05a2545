//! AI writing aids over `/api/ai/*`.
//!
//! Summaries are produced by the backend when an article is saved; the
//! client only asks for rewrites and tag suggestions.

#![allow(clippy::unused_async)]

use super::http::ApiError;
use super::types::Improvement;

pub const IMPROVE_PATH: &str = "/api/ai/improve";
pub const TAGS_PATH: &str = "/api/ai/tags";

/// `POST /api/ai/improve`: rewrite `content`, optionally retitling it.
pub async fn improve(current_title: &str, content: &str) -> Result<Improvement, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::ImproveRequest;

        let resp = super::http::send_json(
            super::http::post(IMPROVE_PATH),
            &ImproveRequest {
                current_title,
                content,
            },
        )
        .await?;
        super::http::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (current_title, content);
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/ai/tags`: suggested tags for `content`.
pub async fn suggest_tags(content: &str) -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::{TagsRequest, TagsResponse};

        let resp =
            super::http::send_json(super::http::post(TAGS_PATH), &TagsRequest { content }).await?;
        let body: TagsResponse = super::http::read_json(resp).await?;
        Ok(body.tags)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = content;
        Err(ApiError::Unavailable)
    }
}
