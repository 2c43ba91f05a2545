//! `AuthBackend` over the `/api/auth/*` endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `ApiError::Unavailable`, which the
//! session store treats like any other failure.

#![allow(clippy::unused_async)]

use crate::net::http::ApiError;
use crate::net::types::UserProfile;
use crate::state::session::AuthBackend;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const SIGNUP_PATH: &str = "/api/auth/signup";
pub const ME_PATH: &str = "/api/auth/me";

/// Production auth backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthBackend;

impl AuthBackend for HttpAuthBackend {
    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::http;
            use crate::net::types::{LoginRequest, TokenResponse};

            let resp = http::send_json(
                gloo_net::http::Request::post(&http::endpoint(LOGIN_PATH)),
                &LoginRequest { email, password },
            )
            .await?;
            let body: TokenResponse = http::read_json(resp).await?;
            Ok(body.token)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }

    async fn signup(&self, username: &str, email: &str, password: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::http;
            use crate::net::types::SignupRequest;

            http::send_json(
                gloo_net::http::Request::post(&http::endpoint(SIGNUP_PATH)),
                &SignupRequest {
                    username,
                    email,
                    password,
                },
            )
            .await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, email, password);
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::http;

            let resp = http::send(
                gloo_net::http::Request::get(&http::endpoint(ME_PATH))
                    .header("Authorization", &http::bearer_header(token)),
            )
            .await?;
            http::read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }
}
