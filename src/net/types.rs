//! Wire DTOs for the backend's `posts`, `comments`, `likes`, and `profiles`
//! tables plus the auth session payloads.
//!
//! DESIGN
//! ======
//! Field names mirror the PostgREST column names so rows deserialize
//! directly. Timestamps stay as the backend's RFC 3339 strings; parsing
//! happens at render time in `util::time_format`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A row from `posts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub created_at: String,
    pub user_id: String,
}

/// Insert payload for `posts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub user_id: String,
}

/// A row from `comments`. `post_id` is absent for the global stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub created_at: String,
    pub user_id: String,
    #[serde(default)]
    pub post_id: Option<String>,
}

/// Which comments a list shows.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CommentScope {
    /// The unscoped stream, newest first.
    Global,
    /// One post's conversation, oldest first.
    Post(String),
}

impl CommentScope {
    pub fn post_id(&self) -> Option<&str> {
        match self {
            Self::Global => None,
            Self::Post(id) => Some(id),
        }
    }

    /// Whether rows are listed oldest first.
    pub fn ascending(&self) -> bool {
        matches!(self, Self::Post(_))
    }

    /// Stable identifier used in cache keys.
    pub fn cache_segment(&self) -> String {
        match self {
            Self::Global => "global".to_owned(),
            Self::Post(id) => id.clone(),
        }
    }
}

/// Insert payload for `comments`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub user_id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
}

/// A row from `likes`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
}

/// Insert payload for `likes`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewLike {
    pub post_id: String,
    pub user_id: String,
}

/// A row from `profiles`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub username: Option<String>,
    pub full_name: Option<String>,
}

impl Profile {
    /// Preferred display name: username, then full name.
    pub fn display_name(&self) -> Option<&str> {
        self.username
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.full_name.as_deref().filter(|s| !s.trim().is_empty()))
    }
}

/// The signed-in user as reported by the auth service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Tokens plus identity returned by sign-in, sign-up, and refresh.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Access-token lifetime in seconds, as issued.
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Unix time (seconds) the access token expires.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

impl Session {
    /// Fill `expires_at` from `expires_in` when the auth service sent only
    /// the lifetime.
    #[must_use]
    pub fn with_expiry(mut self, now_unix: i64) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = self
                .expires_in
                .and_then(|secs| i64::try_from(secs).ok())
                .and_then(|secs| now_unix.checked_add(secs));
        }
        self
    }
}
