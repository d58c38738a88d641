//! Comment rows for one scope, with loading, empty, and error states.

use leptos::prelude::*;

use super::author::AuthorAvatar;
use crate::config::AppConfig;
use crate::net::client::DataClient;
use crate::net::types::{Comment, CommentScope};
use crate::state::auth::AuthState;
use crate::state::query::use_query;
use crate::state::query_cache::QueryKey;
use crate::util::time_format::{DateStyle, display_relative, now};

pub const EMPTY_MESSAGE: &str = "No comments yet. Be the first to comment!";
pub const LOAD_FAILED: &str = "Failed to load comments.";

const SKELETON_ROWS: usize = 3;

/// Comments in `scope`, re-fetched whenever `refresh` changes or the scope's
/// cache key is invalidated.
#[component]
pub fn CommentList(scope: CommentScope, #[prop(into)] refresh: Signal<u64>) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let style = match scope {
        CommentScope::Global => DateStyle::Short,
        CommentScope::Post(_) => DateStyle::DateTime,
    };
    let scope = StoredValue::new(scope);

    let comments = use_query(
        move || QueryKey::comments(&scope.get_value(), refresh.get()),
        move |_| {
            let client = super::rest_client(&config, auth);
            let scope = scope.get_value();
            async move { client.list_comments(&scope).await }
        },
    );

    view! {
        <Suspense fallback=|| view! { <CommentSkeleton/> }>
            {move || {
                comments
                    .get()
                    .map(|result| match result {
                        Err(_) => view! { <p class="comment-list__error">{LOAD_FAILED}</p> }.into_any(),
                        Ok(rows) if rows.is_empty() => {
                            view! { <p class="comment-list__empty">{EMPTY_MESSAGE}</p> }.into_any()
                        }
                        Ok(rows) => {
                            view! {
                                <ul class="comment-list">
                                    {rows
                                        .into_iter()
                                        .map(|comment| view! { <CommentRow comment=comment style=style/> })
                                        .collect_view()}
                                </ul>
                            }
                                .into_any()
                        }
                    })
            }}
        </Suspense>
    }
}

#[component]
fn CommentRow(comment: Comment, style: DateStyle) -> impl IntoView {
    let when = display_relative(&comment.created_at, now(), style);

    view! {
        <li class="comment">
            <AuthorAvatar user_id=comment.user_id/>
            <div class="comment__body">
                <p class="comment__content" style="white-space: pre-wrap">{comment.content}</p>
                <time class="comment__time" datetime=comment.created_at>{when}</time>
            </div>
        </li>
    }
}

#[component]
fn CommentSkeleton() -> impl IntoView {
    view! {
        <ul class="comment-list comment-list--loading" aria-busy="true">
            {(0..SKELETON_ROWS)
                .map(|_| {
                    view! {
                        <li class="comment comment--skeleton">
                            <span class="avatar skeleton"></span>
                            <div class="comment__body">
                                <span class="skeleton skeleton--line"></span>
                                <span class="skeleton skeleton--line skeleton--short"></span>
                            </div>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
