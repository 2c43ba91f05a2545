//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetching and form state and delegates shared
//! rendering to `components`. Protected pages are wrapped in
//! `ProtectedRoute` by `app`, never guard themselves.

pub mod article_detail;
pub mod article_editor;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod signup;
