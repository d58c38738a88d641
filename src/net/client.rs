//! Data client for the `posts`, `comments`, `likes`, and `profiles` tables.
//!
//! Client-side (csr): real PostgREST calls via `gloo-net`.
//! Native builds: every call returns [`BackendError::Unavailable`] so the
//! crate still compiles and the interaction flows can be tested against the
//! in-memory store instead.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status, and decode failures map onto [`BackendError`]; callers
//! log the detail and show their own generic message.

#![allow(clippy::unused_async)]

use async_trait::async_trait;

use super::error::BackendError;
use super::types::{Comment, CommentScope, Like, NewComment, NewLike, NewPost, Post, Profile};
use crate::config::BackendConfig;

/// Backend operations the UI depends on.
///
/// Futures are `?Send`: the browser is single-threaded and `gloo-net`
/// futures are not `Send`.
#[async_trait(?Send)]
pub trait DataClient {
    async fn list_posts(&self) -> Result<Vec<Post>, BackendError>;

    async fn fetch_post(&self, post_id: &str) -> Result<Option<Post>, BackendError>;

    async fn insert_post(&self, post: &NewPost) -> Result<Post, BackendError>;

    /// Comments for `scope`, ordered per [`CommentScope::ascending`].
    async fn list_comments(&self, scope: &CommentScope) -> Result<Vec<Comment>, BackendError>;

    async fn count_comments(&self, post_id: &str) -> Result<u64, BackendError>;

    async fn insert_comment(&self, comment: &NewComment) -> Result<(), BackendError>;

    async fn list_likes(&self, post_id: &str) -> Result<Vec<Like>, BackendError>;

    async fn insert_like(&self, like: &NewLike) -> Result<(), BackendError>;

    async fn delete_like(&self, post_id: &str, user_id: &str) -> Result<(), BackendError>;

    async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, BackendError>;
}

/// PostgREST-backed [`DataClient`].
///
/// Cheap to clone; components build one per interaction from the current
/// session so the bearer token is always current.
#[derive(Clone, Debug)]
pub struct RestClient {
    config: BackendConfig,
    access_token: Option<String>,
}

impl RestClient {
    pub fn new(config: BackendConfig, access_token: Option<String>) -> Self {
        Self { config, access_token }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Value for the `Authorization` header: the user's token when signed
    /// in, the anon key otherwise.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token.as_deref().unwrap_or(&self.config.anon_key))
    }

    fn url(&self, table: &str) -> String {
        super::rest::table_url(&self.config.url, table)
    }

    async fn get_rows<T>(&self, table: &str, params: super::rest::QueryParams) -> Result<Vec<T>, BackendError>
    where
        T: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url(table))
                .query(params.iter().map(|(k, v)| (*k, v.as_str())))
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &self.bearer())
                .send()
                .await
                .map_err(|e| BackendError::Request(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(BackendError::from_status(resp.status(), &body));
            }
            resp.json::<Vec<T>>().await.map_err(|e| BackendError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(table), params);
            Err(BackendError::Unavailable)
        }
    }

    async fn count_rows(&self, table: &str, params: super::rest::QueryParams) -> Result<u64, BackendError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url(table))
                .query(params.iter().map(|(k, v)| (*k, v.as_str())))
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &self.bearer())
                .header("Prefer", "count=exact")
                .send()
                .await
                .map_err(|e| BackendError::Request(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(BackendError::from_status(resp.status(), &body));
            }
            resp.headers()
                .get("content-range")
                .as_deref()
                .and_then(super::rest::parse_content_range_total)
                .ok_or_else(|| BackendError::Decode("missing or unknown Content-Range total".to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(table), params);
            Err(BackendError::Unavailable)
        }
    }

    /// Insert one row. With `returning` the created row is decoded and returned.
    async fn insert_row<B, T>(&self, table: &str, body: &B, returning: bool) -> Result<Option<T>, BackendError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "csr")]
        {
            let prefer = if returning { "return=representation" } else { "return=minimal" };
            let resp = gloo_net::http::Request::post(&self.url(table))
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &self.bearer())
                .header("Prefer", prefer)
                .json(&[body])
                .map_err(|e| BackendError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| BackendError::Request(e.to_string()))?;
            if !resp.ok() {
                let text = resp.text().await.unwrap_or_default();
                return Err(BackendError::from_status(resp.status(), &text));
            }
            if !returning {
                return Ok(None);
            }
            let mut rows = resp.json::<Vec<T>>().await.map_err(|e| BackendError::Decode(e.to_string()))?;
            if rows.is_empty() {
                return Err(BackendError::Decode("insert returned no rows".to_owned()));
            }
            Ok(Some(rows.swap_remove(0)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(table), serde_json::to_value(body), returning);
            Err(BackendError::Unavailable)
        }
    }

    async fn delete_rows(&self, table: &str, params: super::rest::QueryParams) -> Result<(), BackendError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::delete(&self.url(table))
                .query(params.iter().map(|(k, v)| (*k, v.as_str())))
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &self.bearer())
                .send()
                .await
                .map_err(|e| BackendError::Request(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(BackendError::from_status(resp.status(), &body));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(table), params);
            Err(BackendError::Unavailable)
        }
    }
}

#[async_trait(?Send)]
impl DataClient for RestClient {
    async fn list_posts(&self) -> Result<Vec<Post>, BackendError> {
        self.get_rows(super::rest::POSTS, super::rest::posts_params()).await
    }

    async fn fetch_post(&self, post_id: &str) -> Result<Option<Post>, BackendError> {
        let rows: Vec<Post> = self.get_rows(super::rest::POSTS, super::rest::post_by_id_params(post_id)).await?;
        Ok(rows.into_iter().next())
    }

    async fn insert_post(&self, post: &NewPost) -> Result<Post, BackendError> {
        self.insert_row::<NewPost, Post>(super::rest::POSTS, post, true)
            .await?
            .ok_or_else(|| BackendError::Decode("insert returned no rows".to_owned()))
    }

    async fn list_comments(&self, scope: &CommentScope) -> Result<Vec<Comment>, BackendError> {
        self.get_rows(super::rest::COMMENTS, super::rest::comments_params(scope)).await
    }

    async fn count_comments(&self, post_id: &str) -> Result<u64, BackendError> {
        self.count_rows(super::rest::COMMENTS, super::rest::comment_count_params(post_id)).await
    }

    async fn insert_comment(&self, comment: &NewComment) -> Result<(), BackendError> {
        self.insert_row::<NewComment, serde_json::Value>(super::rest::COMMENTS, comment, false)
            .await
            .map(|_| ())
    }

    async fn list_likes(&self, post_id: &str) -> Result<Vec<Like>, BackendError> {
        self.get_rows(super::rest::LIKES, super::rest::likes_params(post_id)).await
    }

    async fn insert_like(&self, like: &NewLike) -> Result<(), BackendError> {
        self.insert_row::<NewLike, serde_json::Value>(super::rest::LIKES, like, false)
            .await
            .map(|_| ())
    }

    async fn delete_like(&self, post_id: &str, user_id: &str) -> Result<(), BackendError> {
        self.delete_rows(super::rest::LIKES, super::rest::like_pair_params(post_id, user_id))
            .await
    }

    async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, BackendError> {
        let rows: Vec<Profile> = self.get_rows(super::rest::PROFILES, super::rest::profile_params(user_id)).await?;
        Ok(rows.into_iter().next())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
