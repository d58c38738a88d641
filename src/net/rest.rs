//! PostgREST request shapes.
//!
//! DESIGN
//! ======
//! Every table read is expressed as a list of query parameters so the browser
//! client only has to hand them to `gloo-net` (which URL-encodes them), and
//! the filters/ordering are unit tested natively.

#[cfg(test)]
#[path = "rest_test.rs"]
mod rest_test;

use super::types::CommentScope;

pub type QueryParams = Vec<(&'static str, String)>;

pub const POSTS: &str = "posts";
pub const COMMENTS: &str = "comments";
pub const LIKES: &str = "likes";
pub const PROFILES: &str = "profiles";

/// `{base}/rest/v1/{table}`
pub fn table_url(base_url: &str, table: &str) -> String {
    format!("{base_url}/rest/v1/{table}")
}

fn eq(value: &str) -> String {
    format!("eq.{value}")
}

/// Feed read: every post, newest first.
pub fn posts_params() -> QueryParams {
    vec![("select", "*".to_owned()), ("order", "created_at.desc".to_owned())]
}

pub fn post_by_id_params(post_id: &str) -> QueryParams {
    vec![("select", "*".to_owned()), ("id", eq(post_id)), ("limit", "1".to_owned())]
}

/// Comments for a scope: chronological for one post, newest first globally.
pub fn comments_params(scope: &CommentScope) -> QueryParams {
    match scope {
        CommentScope::Post(post_id) => vec![
            ("select", "*".to_owned()),
            ("post_id", eq(post_id)),
            ("order", "created_at.asc".to_owned()),
        ],
        CommentScope::Global => vec![("select", "*".to_owned()), ("order", "created_at.desc".to_owned())],
    }
}

/// Count-only read; the total comes back in `Content-Range`.
pub fn comment_count_params(post_id: &str) -> QueryParams {
    vec![("select", "id".to_owned()), ("post_id", eq(post_id)), ("limit", "0".to_owned())]
}

pub fn likes_params(post_id: &str) -> QueryParams {
    vec![("select", "*".to_owned()), ("post_id", eq(post_id))]
}

/// Filter identifying one user's like on one post.
pub fn like_pair_params(post_id: &str, user_id: &str) -> QueryParams {
    vec![("post_id", eq(post_id)), ("user_id", eq(user_id))]
}

pub fn profile_params(user_id: &str) -> QueryParams {
    vec![("select", "*".to_owned()), ("id", eq(user_id)), ("limit", "1".to_owned())]
}

/// Total row count from a `Content-Range` header (`0-4/5`, `*/0`).
///
/// Returns `None` when the total is unknown (`0-4/*`) or the header is malformed.
pub fn parse_content_range_total(header: &str) -> Option<u64> {
    let (_, total) = header.trim().rsplit_once('/')?;
    total.parse().ok()
}

/// Best human-readable message from a PostgREST / auth error body.
pub fn error_message_from_body(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        let trimmed = body.trim();
        return if trimmed.is_empty() { "empty response".to_owned() } else { trimmed.to_owned() };
    };
    ["message", "error_description", "msg", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
        .map_or_else(|| value.to_string(), str::to_owned)
}
