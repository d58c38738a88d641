//! One post in the feed: author, body, image, and the like, comment, and
//! share actions.
//!
//! DESIGN
//! ======
//! Likes and the comment count are independent queries keyed by post id, so
//! a like toggle only re-fetches this card's likes and a new comment only
//! this card's count. The comment count exists only in per-post mode.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;

use super::author::AuthorBadge;
use super::comments_section::CommentsSection;
use crate::config::{AppConfig, CommentMode};
use crate::interactions::comment::SIGN_IN_REQUIRED as COMMENT_SIGN_IN_REQUIRED;
use crate::interactions::like::{LikeSummary, LikeToggle, SIGN_IN_REQUIRED, TOGGLE_FAILED, summarize_likes, toggle_like};
use crate::interactions::require_user;
use crate::interactions::share::{
    LINK_COPIED, LINK_COPIED_DESCRIPTION, SHARE_FAILED, ShareData, ShareMethod, current_origin, share_post,
};
use crate::net::client::DataClient;
use crate::net::types::{CommentScope, Post};
use crate::state::auth::AuthState;
use crate::state::query::{QueryClient, use_query};
use crate::state::query_cache::QueryKey;
use crate::state::toast::{ToastMessage, ToastState, notify};
use crate::util::time_format::{display_date_time, local_offset};

/// Whether an `expanded` card should open its comments now. Only the first
/// sign-in seen opens them; after that the reader's own toggle wins.
fn opens_comments(expanded: bool, signed_in: bool, already_opened: bool) -> bool {
    expanded && signed_in && !already_opened
}

/// Card for `post`. With `expanded` the comments start open for signed-in
/// users (the post page).
#[component]
pub fn PostCard(post: Post, #[prop(optional)] expanded: bool) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let queries = expect_context::<QueryClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let per_post = config.comment_mode == CommentMode::PerPost;

    let post_id = post.id.clone();
    let likes = {
        let config = config.clone();
        let post_id = post_id.clone();
        let key = QueryKey::likes(&post_id);
        use_query(
            move || key.clone(),
            move |_| {
                let client = super::rest_client(&config, auth);
                let post_id = post_id.clone();
                async move { client.list_likes(&post_id).await }
            },
        )
    };
    let comment_count = per_post.then(|| {
        let config = config.clone();
        let post_id = post_id.clone();
        let key = QueryKey::comment_count(&post_id);
        use_query(
            move || key.clone(),
            move |_| {
                let client = super::rest_client(&config, auth);
                let post_id = post_id.clone();
                async move { client.count_comments(&post_id).await }
            },
        )
    });

    let summary = move || {
        let user_id = auth.with(|a| a.user().map(|u| u.id.clone()));
        likes
            .get()
            .and_then(Result::ok)
            .map(|rows| summarize_likes(&rows, user_id.as_deref()))
            .unwrap_or_default()
    };

    let show_comments = RwSignal::new(expanded && auth.with_untracked(|a| a.user().is_some()));
    // The session may resolve after the post itself has loaded.
    Effect::new(move |opened: Option<bool>| {
        let opened = opened.unwrap_or(false);
        let signed_in = auth.with(|a| a.user().is_some());
        if opens_comments(expanded, signed_in, opened) {
            show_comments.set(true);
            return true;
        }
        opened
    });
    let stored_post = StoredValue::new(post.clone());

    let on_like = {
        let config = config.clone();
        let post_id = post_id.clone();
        move |_| {
            let user = auth.with_untracked(|a| a.user().cloned());
            if let Err(message) = require_user(user.as_ref(), SIGN_IN_REQUIRED) {
                notify(toasts, message);
                return;
            }
            let LikeSummary { liked, .. } = untrack(summary);
            let client = super::rest_client(&config, auth);
            let post_id = post_id.clone();
            super::spawn_task(async move {
                match toggle_like(&client, user.as_ref(), &post_id, liked).await {
                    LikeToggle::Liked { invalidate } | LikeToggle::Unliked { invalidate } => {
                        queries.invalidate_all(&invalidate);
                    }
                    LikeToggle::NotAuthenticated => notify(toasts, ToastMessage::error(SIGN_IN_REQUIRED)),
                    LikeToggle::Failed(_) => notify(toasts, ToastMessage::error(TOGGLE_FAILED)),
                }
            });
        }
    };

    let on_toggle_comments = move |_| {
        let user = auth.with_untracked(|a| a.user().cloned());
        match require_user(user.as_ref(), COMMENT_SIGN_IN_REQUIRED) {
            Ok(_) => show_comments.update(|open| *open = !*open),
            Err(message) => notify(toasts, message),
        }
    };

    let on_share = move |_| {
        let data = ShareData::for_post(&stored_post.get_value(), &current_origin());
        super::spawn_task(async move {
            match share_post(&data).await {
                Ok(ShareMethod::Copied) => {
                    notify(toasts, ToastMessage::success(LINK_COPIED, LINK_COPIED_DESCRIPTION));
                }
                Ok(ShareMethod::Native) => {}
                Err(e) => {
                    leptos::logging::error!("Share error: {e}");
                    notify(toasts, ToastMessage::error(SHARE_FAILED));
                }
            }
        });
    };

    let count_label = move || {
        comment_count
            .and_then(|count| count.get())
            .and_then(Result::ok)
            .map(|n| n.to_string())
            .unwrap_or_default()
    };
    let posted_at = display_date_time(&post.created_at, local_offset());

    view! {
        <article class="post-card">
            <header class="post-card__header">
                <AuthorBadge user_id=post.user_id.clone()/>
                <div class="post-card__meta">
                    <h3 class="post-card__title">{post.title.clone()}</h3>
                    <time class="post-card__time" datetime=post.created_at.clone()>{posted_at}</time>
                </div>
            </header>
            <div class="post-card__body">
                {post
                    .content
                    .clone()
                    .map(|content| view! { <p class="post-card__content" style="white-space: pre-wrap">{content}</p> })}
                {post
                    .image_url
                    .clone()
                    .map(|src| view! { <img class="post-card__image" src=src alt="Post image" loading="lazy"/> })}
            </div>
            <footer class="post-card__actions">
                <button
                    class=move || {
                        if summary().liked { "post-card__action post-card__action--active" } else { "post-card__action" }
                    }
                    aria-pressed=move || summary().liked.to_string()
                    on:click=on_like
                >
                    {move || if summary().liked { "♥" } else { "♡" }}
                    " "
                    {move || summary().count}
                </button>
                <Show when=move || per_post>
                    <button class="post-card__action" on:click=on_toggle_comments>
                        "💬 "
                        {count_label}
                    </button>
                </Show>
                <button class="post-card__action" on:click=on_share>
                    "Share"
                </button>
            </footer>
            <Show when=move || per_post && show_comments.get() && auth.with(|a| a.user().is_some())>
                <CommentsSection scope=CommentScope::Post(post_id.clone())/>
            </Show>
        </article>
    }
}
