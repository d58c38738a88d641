//! The feed: every post, newest first.

use leptos::prelude::*;

use super::post_card::PostCard;
use crate::config::AppConfig;
use crate::net::client::DataClient;
use crate::state::auth::AuthState;
use crate::state::query::use_query;
use crate::state::query_cache::QueryKey;

#[component]
pub fn PostList(#[prop(into)] refresh: Signal<u64>) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let posts = use_query(
        move || QueryKey::posts(refresh.get()),
        move |_| {
            let client = super::rest_client(&config, auth);
            async move { client.list_posts().await }
        },
    );

    view! {
        <Suspense fallback=|| view! { <p class="post-list__status">"Loading posts..."</p> }>
            {move || {
                posts
                    .get()
                    .map(|result| match result {
                        Err(_) => {
                            view! { <p class="post-list__status post-list__status--error">"Failed to load posts."</p> }
                                .into_any()
                        }
                        Ok(rows) if rows.is_empty() => {
                            view! {
                                <p class="post-list__status">"No posts yet. Be the first to share something!"</p>
                            }
                                .into_any()
                        }
                        Ok(rows) => {
                            view! {
                                <div class="post-list">
                                    {rows.into_iter().map(|post| view! { <PostCard post=post/> }).collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    })
            }}
        </Suspense>
    }
}
