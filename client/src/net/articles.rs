//! Article CRUD over `/api/articles*`.
//!
//! Client-side (hydrate): authorized `gloo-net` calls through `net::http`.
//! Server-side (SSR): `ApiError::Unavailable`; pages only fetch after mount.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use url::form_urlencoded;

use super::http::ApiError;
use super::types::{Article, ArticleCategory, ArticleRequest, PagedResponse};

pub const ARTICLES_PATH: &str = "/api/articles";
pub const MY_ARTICLES_PATH: &str = "/api/articles/me";

/// Home-page filter. Blank search and `None` category are omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    pub search: String,
    pub category: Option<ArticleCategory>,
}

/// List path including the filter query string.
pub fn articles_path(query: &ArticleQuery) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    let search = query.search.trim();
    if !search.is_empty() {
        params.append_pair("search", search);
    }
    if let Some(category) = query.category {
        params.append_pair("category", category.as_str());
    }
    let params = params.finish();
    if params.is_empty() {
        ARTICLES_PATH.to_owned()
    } else {
        format!("{ARTICLES_PATH}?{params}")
    }
}

pub fn article_path(id: i64) -> String {
    format!("{ARTICLES_PATH}/{id}")
}

/// `GET /api/articles` with optional search/category filters.
pub async fn list_articles(query: &ArticleQuery) -> Result<PagedResponse<Article>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::send(super::http::get(&articles_path(query))).await?;
        super::http::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/articles/me`: articles written by the signed-in user.
pub async fn my_articles() -> Result<PagedResponse<Article>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::send(super::http::get(MY_ARTICLES_PATH)).await?;
        super::http::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/articles/{id}`.
pub async fn get_article(id: i64) -> Result<Article, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::send(super::http::get(&article_path(id))).await?;
        super::http::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/articles`. Returns the stored article.
pub async fn create_article(payload: &ArticleRequest) -> Result<Article, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::send_json(super::http::post(ARTICLES_PATH), payload).await?;
        super::http::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// `PUT /api/articles/{id}`. Returns the stored article.
pub async fn update_article(id: i64, payload: &ArticleRequest) -> Result<Article, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::send_json(super::http::put(&article_path(id)), payload).await?;
        super::http::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE /api/articles/{id}`.
pub async fn delete_article(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::send(super::http::delete(&article_path(id))).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
