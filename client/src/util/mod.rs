//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers kept out of components so routing and formatting rules can
//! be unit tested without a browser.

pub mod dates;
pub mod guard;
pub mod tags;
