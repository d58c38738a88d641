//! Like toggling and like-count aggregation.
//!
//! There is no in-flight guard: two quick toggles can both read the same
//! `liked` state and race. The store's pair uniqueness rejects a duplicate
//! insert, which surfaces as an ordinary failure.

#[cfg(test)]
#[path = "like_test.rs"]
mod like_test;

use crate::net::client::DataClient;
use crate::net::error::BackendError;
use crate::net::types::{Like, NewLike, User};
use crate::state::query_cache::QueryKey;

pub const SIGN_IN_REQUIRED: &str = "Please sign in to like posts.";
pub const TOGGLE_FAILED: &str = "Failed to update like.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LikeSummary {
    pub count: usize,
    /// Whether the current user is among the likers.
    pub liked: bool,
}

/// Count `likes` and check whether `user_id` is among them.
pub fn summarize_likes(likes: &[Like], user_id: Option<&str>) -> LikeSummary {
    LikeSummary {
        count: likes.len(),
        liked: user_id.is_some_and(|uid| likes.iter().any(|l| l.user_id == uid)),
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum LikeToggle {
    NotAuthenticated,
    Liked { invalidate: Vec<QueryKey> },
    Unliked { invalidate: Vec<QueryKey> },
    Failed(BackendError),
}

/// Flip `user`'s like on `post_id` given the currently displayed state.
pub async fn toggle_like<C>(client: &C, user: Option<&User>, post_id: &str, currently_liked: bool) -> LikeToggle
where
    C: DataClient + ?Sized,
{
    let Some(user) = user else {
        return LikeToggle::NotAuthenticated;
    };

    let result = if currently_liked {
        client.delete_like(post_id, &user.id).await
    } else {
        client
            .insert_like(&NewLike { post_id: post_id.to_owned(), user_id: user.id.clone() })
            .await
    };

    let invalidate = vec![QueryKey::likes(post_id)];
    match result {
        Ok(()) if currently_liked => LikeToggle::Unliked { invalidate },
        Ok(()) => LikeToggle::Liked { invalidate },
        Err(e) => {
            leptos::logging::error!("Like error: {e}");
            LikeToggle::Failed(e)
        }
    }
}
