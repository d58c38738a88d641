//! Comment submission.

#[cfg(test)]
#[path = "comment_test.rs"]
mod comment_test;

use crate::net::client::DataClient;
use crate::net::error::BackendError;
use crate::net::types::{CommentScope, NewComment, User};
use crate::state::query_cache::QueryKey;

pub const ADDED_TITLE: &str = "Comment added!";
pub const ADDED_DESCRIPTION: &str = "Your comment has been posted.";
pub const ADD_FAILED: &str = "Failed to add comment.";
pub const SIGN_IN_REQUIRED: &str = "Please sign in to view and add comments.";

#[derive(Debug, PartialEq, Eq)]
pub enum CommentSubmit {
    /// Input was blank after trimming; nothing happened.
    Skipped,
    NotAuthenticated,
    Posted { invalidate: Vec<QueryKey> },
    Failed(BackendError),
}

/// Keys made stale by a new comment in `scope`.
pub fn invalidations_after_comment(scope: &CommentScope) -> Vec<QueryKey> {
    let mut keys = vec![QueryKey::comments_scope(scope)];
    if let Some(post_id) = scope.post_id() {
        keys.push(QueryKey::comment_count(post_id));
    }
    keys
}

/// Insert `input` as a comment by `user` in `scope`.
///
/// Blank input is a no-op and an absent user aborts before any backend call.
pub async fn submit_comment<C>(client: &C, user: Option<&User>, scope: &CommentScope, input: &str) -> CommentSubmit
where
    C: DataClient + ?Sized,
{
    let content = input.trim();
    if content.is_empty() {
        return CommentSubmit::Skipped;
    }
    let Some(user) = user else {
        return CommentSubmit::NotAuthenticated;
    };

    let comment = NewComment {
        user_id: user.id.clone(),
        content: content.to_owned(),
        post_id: scope.post_id().map(str::to_owned),
    };
    match client.insert_comment(&comment).await {
        Ok(()) => CommentSubmit::Posted { invalidate: invalidations_after_comment(scope) },
        Err(e) => {
            leptos::logging::error!("Comment error: {e}");
            CommentSubmit::Failed(e)
        }
    }
}
