//! Shared request layer for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every REST call goes through the builders here so the persisted bearer
//! token is attached in exactly one place. The token is only read; writes
//! belong to the session store.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Status` carrying the backend's
//! `{ "message": ... }` body when present, so pages can show it verbatim.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

/// Backend origin used when `KNOWLEDGE_HUB_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Transport(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// True when the backend rejected the credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }

    /// Backend-supplied message if there is one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// API origin baked in at compile time.
pub fn api_base() -> &'static str {
    option_env!("KNOWLEDGE_HUB_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Absolute URL for an API path such as `/api/articles`.
pub fn endpoint(path: &str) -> String {
    join_url(api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// `Authorization` header value for `token`.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extract `message` from a JSON error body.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(feature = "hydrate")]
pub(crate) use client_impl::*;

#[cfg(feature = "hydrate")]
mod client_impl {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiError, bearer_header, endpoint, parse_error_message};

    fn authorized(builder: RequestBuilder) -> RequestBuilder {
        match crate::state::session::persisted_token() {
            Some(token) => builder.header("Authorization", &bearer_header(&token)),
            None => builder,
        }
    }

    pub(crate) fn get(path: &str) -> RequestBuilder {
        authorized(Request::get(&endpoint(path)))
    }

    pub(crate) fn post(path: &str) -> RequestBuilder {
        authorized(Request::post(&endpoint(path)))
    }

    pub(crate) fn put(path: &str) -> RequestBuilder {
        authorized(Request::put(&endpoint(path)))
    }

    pub(crate) fn delete(path: &str) -> RequestBuilder {
        authorized(Request::delete(&endpoint(path)))
    }

    /// Send a request with no body.
    pub(crate) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let resp = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_status(resp).await
    }

    /// Send `body` as JSON.
    pub(crate) async fn send_json<B: Serialize>(
        builder: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        let request = builder
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_status(resp).await
    }

    pub(crate) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn check_status(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status,
            message: parse_error_message(&body),
        })
    }
}
