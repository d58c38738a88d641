//! Networking modules for the backend's REST, auth, and storage APIs.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` is the table data client, `auth` the session provider, `storage`
//! handles image uploads, `rest` holds the PostgREST request shapes, and
//! `types` defines the shared wire schema.

pub mod auth;
pub mod client;
pub mod error;
#[cfg(test)]
pub mod memory;
pub mod rest;
pub mod storage;
pub mod types;
