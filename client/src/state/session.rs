//! Session store: bearer token + resolved profile for the current visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once in `App` and provided via context. Route guards and the navbar
//! subscribe to the read-only `session()` signal; only the four operations
//! here (`login`, `signup`, `logout`, `rehydrate`) mutate it.
//!
//! LIFECYCLE
//! =========
//! ```text
//! Resolving     --(validate ok)-----------> Authenticated
//! Resolving     --(validate err / none)---> Anonymous
//! Authenticated --(logout)----------------> Anonymous
//! Anonymous     --(login/signup ok)-------> Authenticated
//! ```
//! Async results are applied only if the persisted token still matches the
//! token that started the request. A validation that loses a race against
//! `logout` is dropped.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::token_store::{LocalTokenStorage, TokenStorage};
use crate::net::auth::HttpAuthBackend;
use crate::net::http::ApiError;
use crate::net::types::UserProfile;

/// Current authentication state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Session {
    /// A persisted token is being validated; no profile yet.
    Resolving { token: String },
    /// Token and profile are both known.
    Authenticated { token: String, user: UserProfile },
    /// No credential.
    Anonymous,
}

/// Coarse view of `Session` for guards and templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Resolving,
    Authenticated,
    Anonymous,
}

impl Session {
    pub fn status(&self) -> SessionStatus {
        match self {
            Session::Resolving { .. } => SessionStatus::Resolving,
            Session::Authenticated { .. } => SessionStatus::Authenticated,
            Session::Anonymous => SessionStatus::Anonymous,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Resolving { token } | Session::Authenticated { token, .. } => Some(token),
            Session::Anonymous => None,
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Session::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }
}

/// Network seam for the three auth endpoints.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    /// Exchange credentials for a bearer token.
    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError>;
    /// Register a new account.
    async fn signup(&self, username: &str, email: &str, password: &str) -> Result<(), ApiError>;
    /// Resolve the profile that `token` belongs to.
    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError>;
}

/// Failure of an explicit login or signup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("login rejected")]
    Login(#[source] ApiError),
    #[error("signup rejected")]
    Signup(#[source] ApiError),
    #[error("profile fetch after login failed")]
    Profile(#[source] ApiError),
    #[error("session changed while signing in")]
    Superseded,
}

impl AuthError {
    /// Message for the form, preferring whatever the backend said.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AuthError::Login(err) | AuthError::Signup(err) | AuthError::Profile(err) => {
                err.user_message(fallback)
            }
            AuthError::Superseded => fallback.to_owned(),
        }
    }
}

/// Session store used by the running app.
pub type AppSession = SessionStore<HttpAuthBackend, LocalTokenStorage>;

/// Token visible to the shared request layer. Read-only.
pub fn persisted_token() -> Option<String> {
    LocalTokenStorage.load()
}

/// Owner of the session signal and the persisted credential.
pub struct SessionStore<B, S> {
    session: RwSignal<Session>,
    backend: Arc<B>,
    storage: Arc<S>,
}

impl<B, S> Clone for SessionStore<B, S> {
    fn clone(&self) -> Self {
        Self {
            session: self.session,
            backend: Arc::clone(&self.backend),
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<B: AuthBackend, S: TokenStorage> SessionStore<B, S> {
    /// Start in `Resolving` if a token was persisted, else `Anonymous`.
    pub fn new(backend: B, storage: S) -> Self {
        let initial = match storage.load() {
            Some(token) => Session::Resolving { token },
            None => Session::Anonymous,
        };
        log::debug!("session starts {:?}", initial.status());
        Self {
            session: RwSignal::new(initial),
            backend: Arc::new(backend),
            storage: Arc::new(storage),
        }
    }

    /// Reactive, read-only view of the session.
    pub fn session(&self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    /// Current session without subscribing.
    pub fn snapshot(&self) -> Session {
        self.session.get_untracked()
    }

    /// Exchange credentials, persist the token, then fetch the profile.
    ///
    /// The session only becomes `Authenticated` once both requests succeed.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let token = self
            .backend
            .login(email, password)
            .await
            .map_err(AuthError::Login)?;
        self.storage.store(&token);

        let profile = self.backend.fetch_profile(&token).await;
        if !self.token_is_persisted(&token) {
            log::debug!("discarding login result; credential changed mid-flight");
            return Err(AuthError::Superseded);
        }
        match profile {
            Ok(user) => {
                log::info!("signed in as {}", user.username);
                self.session.set(Session::Authenticated { token, user });
                Ok(())
            }
            Err(err) => {
                log::warn!("profile fetch after login failed: {err}");
                self.storage.clear();
                self.session.set(Session::Anonymous);
                Err(AuthError::Profile(err))
            }
        }
    }

    /// Register, then log in with the same credentials.
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> Result<(), AuthError> {
        self.backend
            .signup(username, email, password)
            .await
            .map_err(AuthError::Signup)?;
        self.login(email, password).await
    }

    /// Drop the credential. Never fails and never touches the network.
    pub fn logout(&self) {
        self.storage.clear();
        self.session.set(Session::Anonymous);
        log::info!("signed out");
    }

    /// Validate a persisted token once at startup.
    ///
    /// Settles `Resolving` to `Authenticated` or `Anonymous`; failures are
    /// logged, not returned.
    pub async fn rehydrate(&self) {
        let Session::Resolving { token } = self.snapshot() else {
            return;
        };
        let result = self.backend.fetch_profile(&token).await;
        if !self.still_resolving(&token) {
            log::debug!("discarding stale session validation");
            return;
        }
        match result {
            Ok(user) => {
                log::info!("session restored for {}", user.username);
                self.session.set(Session::Authenticated { token, user });
            }
            Err(err) => {
                log::warn!("persisted session rejected: {err}");
                self.storage.clear();
                self.session.set(Session::Anonymous);
            }
        }
    }

    fn token_is_persisted(&self, token: &str) -> bool {
        self.storage.load().as_deref() == Some(token)
    }

    fn still_resolving(&self, token: &str) -> bool {
        self.token_is_persisted(token)
            && matches!(self.snapshot(), Session::Resolving { token: ref current } if current == token)
    }
}
