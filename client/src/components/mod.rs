//! Reusable UI components shared across pages.
//!
//! DESIGN
//! ======
//! Components receive state through props or context and emit user intent
//! through callbacks; network calls stay in pages.

pub mod article_card;
pub mod navbar;
pub mod protected_route;
pub mod search_filter;
