//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser storage, date formatting, and display-name
//! resolution from component logic so they stay testable natively.

pub mod display;
pub mod session_store;
pub mod time_format;
