//! Post creation from the create-post dialog.
//!
//! The image upload happens in the dialog before [`create_post`] runs (it
//! needs a browser `File`); this flow only sees the resulting public URL.

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

use crate::net::client::DataClient;
use crate::net::error::BackendError;
use crate::net::types::{NewPost, Post, User};
use crate::state::query_cache::{QueryKey, QueryKind};

pub const CREATED_TITLE: &str = "Post created!";
pub const CREATED_DESCRIPTION: &str = "Your post is now live.";
pub const CREATE_FAILED: &str = "Failed to create post.";
pub const TITLE_REQUIRED: &str = "Please enter a title.";
pub const SIGN_IN_REQUIRED: &str = "Please sign in to create posts.";

/// Validated dialog input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: Option<String>,
}

/// Trim the dialog fields. Blank content becomes absent.
///
/// # Errors
///
/// Returns the "enter a title" message when the trimmed title is empty.
pub fn validate_post(title: &str, content: &str) -> Result<PostDraft, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TITLE_REQUIRED);
    }
    let content = content.trim();
    Ok(PostDraft {
        title: title.to_owned(),
        content: (!content.is_empty()).then(|| content.to_owned()),
    })
}

#[derive(Debug, PartialEq, Eq)]
pub enum PostCreate {
    NotAuthenticated,
    Created { post: Post, invalidate: Vec<QueryKey> },
    Failed(BackendError),
}

/// Insert `draft` as a post by `user`.
pub async fn create_post<C>(client: &C, user: Option<&User>, draft: PostDraft, image_url: Option<String>) -> PostCreate
where
    C: DataClient + ?Sized,
{
    let Some(user) = user else {
        return PostCreate::NotAuthenticated;
    };

    let new_post = NewPost { title: draft.title, content: draft.content, image_url, user_id: user.id.clone() };
    match client.insert_post(&new_post).await {
        Ok(post) => {
            leptos::logging::log!("created post {}", post.id);
            PostCreate::Created { post, invalidate: vec![QueryKey::new(QueryKind::Posts)] }
        }
        Err(e) => {
            leptos::logging::error!("Post creation error: {e}");
            PostCreate::Failed(e)
        }
    }
}
