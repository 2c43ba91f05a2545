//! Host configuration from the environment.
//!
//! `.env` is loaded by `main` before this runs. Leptos build options come
//! from `[package.metadata.leptos]` (or cargo-leptos env vars) separately.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, HostError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { port })
    }
}

/// Parse `PORT`; unset or blank means `DEFAULT_PORT`.
pub fn parse_port(raw: Option<&str>) -> Result<u16, HostError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| HostError::InvalidPort(value.to_owned())),
    }
}
