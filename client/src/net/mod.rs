//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the shared request layer (base URL, bearer attachment, error
//! mapping); `auth`, `articles` and `ai` are thin endpoint wrappers over it,
//! and `types` defines the wire schema.

pub mod ai;
pub mod articles;
pub mod auth;
pub mod http;
pub mod types;
