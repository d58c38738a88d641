//! Post image uploads to the backend's object storage.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use super::error::BackendError;
use crate::config::BackendConfig;

/// Object path for an uploaded image: `{user_id}/{object_id}.{ext}`.
///
/// The extension comes from the original file name, lowercased; names
/// without a usable extension get none.
pub fn image_object_path(user_id: &str, file_name: &str, object_id: &str) -> String {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric()));
    match ext {
        Some(ext) => format!("{user_id}/{object_id}.{ext}"),
        None => format!("{user_id}/{object_id}"),
    }
}

pub fn upload_url(config: &BackendConfig, path: &str) -> String {
    format!("{}/storage/v1/object/{}/{path}", config.url, config.image_bucket)
}

/// Public URL stored in `posts.image_url`.
pub fn public_url(config: &BackendConfig, path: &str) -> String {
    format!("{}/storage/v1/object/public/{}/{path}", config.url, config.image_bucket)
}

/// Upload `file` for `user_id` and return its public URL.
///
/// # Errors
///
/// Returns a [`BackendError`] if the upload is rejected or cannot be sent.
#[cfg(feature = "csr")]
pub async fn upload_post_image(
    config: &BackendConfig,
    access_token: &str,
    user_id: &str,
    file: web_sys::File,
) -> Result<String, BackendError> {
    let object_id = uuid::Uuid::new_v4().to_string();
    let path = image_object_path(user_id, &file.name(), &object_id);
    let content_type = file.type_();
    let content_type = if content_type.is_empty() { "application/octet-stream".to_owned() } else { content_type };

    let resp = gloo_net::http::Request::post(&upload_url(config, &path))
        .header("apikey", &config.anon_key)
        .header("Authorization", &format!("Bearer {access_token}"))
        .header("Content-Type", &content_type)
        .header("x-upsert", "false")
        .body(file)
        .map_err(|e| BackendError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| BackendError::Request(e.to_string()))?;
    if !resp.ok() {
        let text = resp.text().await.unwrap_or_default();
        return Err(BackendError::from_status(resp.status(), &text));
    }
    Ok(public_url(config, &path))
}
