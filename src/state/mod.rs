//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `query_cache`, `toast`, `feed`) so
//! components depend on small focused models. `query` is the only reactive
//! wrapper; everything else is plain data held in `RwSignal`s.

pub mod auth;
pub mod feed;
pub mod query;
pub mod query_cache;
pub mod toast;
