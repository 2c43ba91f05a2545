//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns authentication and is the only writer of the persisted
//! credential (`token_store`). `remote` is the load state pages use for
//! their own fetches.

pub mod remote;
pub mod session;
pub mod token_store;
