//! Session persistence in `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; native builds treat the
//! store as permanently empty.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::net::types::Session;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "forum.session";

fn encode(session: &Session) -> Option<String> {
    serde_json::to_string(session).ok()
}

fn decode(raw: &str) -> Option<Session> {
    serde_json::from_str(raw).ok()
}

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the stored session, ignoring anything that no longer parses.
pub fn load() -> Option<Session> {
    #[cfg(feature = "csr")]
    {
        let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        decode(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = decode;
        None
    }
}

pub fn save(session: &Session) {
    let Some(raw) = encode(session) else {
        return;
    };
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(STORAGE_KEY, &raw);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = raw;
    }
}

pub fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
