//! Post sharing: the Web Share API when the browser has it, otherwise the
//! post URL goes to the clipboard.
//!
//! A dismissed share sheet rejects the same way a real failure does, so
//! both surface as [`ShareError::Rejected`] and the same toast.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use crate::net::types::Post;

pub const LINK_COPIED: &str = "Link copied";
pub const LINK_COPIED_DESCRIPTION: &str = "Post link copied to clipboard.";
pub const SHARE_FAILED: &str = "Failed to share post.";

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("neither navigator.share nor the clipboard is available")]
    Unsupported,
    #[error("share rejected: {0}")]
    Rejected(String),
}

/// How a successful share was delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareMethod {
    Native,
    Copied,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Canonical address of a post: `{origin}/post/{id}`.
pub fn post_url(origin: &str, post_id: &str) -> String {
    format!("{}/post/{post_id}", origin.trim_end_matches('/'))
}

impl ShareData {
    /// Share payload for `post`; the text is its content, or the title for
    /// title-only posts.
    pub fn for_post(post: &Post, origin: &str) -> Self {
        let text = post
            .content
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(&post.title);
        Self { title: post.title.clone(), text: text.to_owned(), url: post_url(origin, &post.id) }
    }
}

/// `window.location.origin`, empty outside the browser.
pub fn current_origin() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Share `data` natively, falling back to copying its URL.
///
/// # Errors
///
/// Returns [`ShareError::Unsupported`] when neither API exists and
/// [`ShareError::Rejected`] when the browser rejects or the user cancels.
#[cfg(feature = "csr")]
pub async fn share_post(data: &ShareData) -> Result<ShareMethod, ShareError> {
    use js_sys::{Function, Object, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let rejected = |e: JsValue| ShareError::Rejected(format!("{e:?}"));

    let navigator = web_sys::window().ok_or(ShareError::Unsupported)?.navigator();
    let navigator: &JsValue = navigator.as_ref();

    let share = Reflect::get(navigator, &JsValue::from_str("share")).map_err(rejected)?;
    if let Some(share) = share.dyn_ref::<Function>() {
        let payload = Object::new();
        for (key, value) in [("title", &data.title), ("text", &data.text), ("url", &data.url)] {
            Reflect::set(&payload, &JsValue::from_str(key), &JsValue::from_str(value)).map_err(rejected)?;
        }
        let promise: Promise = share.call1(navigator, &payload).map_err(rejected)?.unchecked_into();
        JsFuture::from(promise).await.map_err(rejected)?;
        return Ok(ShareMethod::Native);
    }

    let clipboard = Reflect::get(navigator, &JsValue::from_str("clipboard")).map_err(rejected)?;
    if clipboard.is_undefined() {
        return Err(ShareError::Unsupported);
    }
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText")).map_err(rejected)?;
    let write_text = write_text.dyn_ref::<Function>().ok_or(ShareError::Unsupported)?;
    let promise: Promise = write_text
        .call1(&clipboard, &JsValue::from_str(&data.url))
        .map_err(rejected)?
        .unchecked_into();
    JsFuture::from(promise).await.map_err(rejected)?;
    Ok(ShareMethod::Copied)
}

/// Native builds have neither API.
///
/// # Errors
///
/// Always returns [`ShareError::Unsupported`].
#[cfg(not(feature = "csr"))]
#[allow(clippy::unused_async)]
pub async fn share_post(data: &ShareData) -> Result<ShareMethod, ShareError> {
    let _ = data;
    Err(ShareError::Unsupported)
}
