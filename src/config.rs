//! Application configuration baked in at compile time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A CSR bundle has no process environment at runtime, so values are read
//! with `option_env!` when the WASM binary is built and parsed by the pure
//! `AppConfig::from_values`.

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:54321";
pub const DEFAULT_IMAGE_BUCKET: &str = "post-images";

/// Which comment scope this deployment uses. The two are never mixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommentMode {
    /// Comments belong to a post and render inside its card.
    #[default]
    PerPost,
    /// One unscoped comment stream rendered below the feed.
    Global,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL without a trailing slash.
    pub url: String,
    pub anon_key: String,
    pub image_bucket: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub comment_mode: CommentMode,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("FORUM_BACKEND_URL must start with http:// or https://, got '{0}'")]
    InvalidBackendUrl(String),

    #[error("unknown FORUM_COMMENT_MODE '{0}' (expected 'per_post' or 'global')")]
    UnknownCommentMode(String),

    #[error("FORUM_IMAGE_BUCKET must not be empty")]
    EmptyImageBucket,
}

impl AppConfig {
    /// Build config from the values captured at compile time.
    ///
    /// Optional (all):
    /// - `FORUM_BACKEND_URL`: default `http://127.0.0.1:54321`
    /// - `FORUM_BACKEND_ANON_KEY`: default empty
    /// - `FORUM_IMAGE_BUCKET`: default `post-images`
    /// - `FORUM_COMMENT_MODE`: `per_post` (default) or `global`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when any present value is malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("FORUM_BACKEND_URL"),
            option_env!("FORUM_BACKEND_ANON_KEY"),
            option_env!("FORUM_IMAGE_BUCKET"),
            option_env!("FORUM_COMMENT_MODE"),
        )
    }

    /// # Errors
    ///
    /// Returns a [`ConfigError`] when any present value is malformed.
    pub fn from_values(
        url: Option<&str>,
        anon_key: Option<&str>,
        image_bucket: Option<&str>,
        comment_mode: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let url = parse_backend_url(url)?;
        let anon_key = anon_key.map(str::trim).unwrap_or_default().to_owned();
        if anon_key.is_empty() {
            leptos::logging::warn!("FORUM_BACKEND_ANON_KEY is empty; backend requests will likely be rejected");
        }
        let image_bucket = image_bucket.map_or(DEFAULT_IMAGE_BUCKET, str::trim).to_owned();
        if image_bucket.is_empty() {
            return Err(ConfigError::EmptyImageBucket);
        }
        let comment_mode = parse_comment_mode(comment_mode)?;

        Ok(Self { backend: BackendConfig { url, anon_key, image_bucket }, comment_mode })
    }
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let raw = raw.map_or(DEFAULT_BACKEND_URL, str::trim);
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidBackendUrl(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_comment_mode(raw: Option<&str>) -> Result<CommentMode, ConfigError> {
    match raw.map_or("per_post", str::trim) {
        "per_post" | "" => Ok(CommentMode::PerPost),
        "global" => Ok(CommentMode::Global),
        other => Err(ConfigError::UnknownCommentMode(other.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
