//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (auth gating, dialog state,
//! navigation) and delegates rendering details to `components`.

pub mod auth;
pub mod index;
pub mod post;
