//! Load state for page-scoped remote data.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use crate::net::http::ApiError;

/// Loading / loaded / error for a single fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Remote<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Remote<T> {
    /// Map a fetch result, using `fallback` when the backend gave no message.
    pub fn from_result(result: Result<T, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(value) => Remote::Loaded(value),
            Err(err) => {
                log::warn!("{fallback} ({err})");
                Remote::Failed(err.user_message(fallback))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Remote::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Remote::Failed(message) => Some(message),
            _ => None,
        }
    }
}
