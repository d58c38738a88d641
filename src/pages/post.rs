//! Single-post page addressed by the share URL `/post/{id}`.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::app_header::AppHeader;
use crate::components::post_card::PostCard;
use crate::config::AppConfig;
use crate::net::client::DataClient;
use crate::state::auth::AuthState;
use crate::state::query::use_query;
use crate::state::query_cache::QueryKey;

pub const NOT_FOUND: &str = "Post not found.";

#[component]
pub fn PostPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let post_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let post = use_query(
        move || QueryKey::post(&post_id()),
        move |key: QueryKey| {
            let client = crate::components::rest_client(&config, auth);
            let id = key.scope.first().cloned().unwrap_or_default();
            async move { client.fetch_post(&id).await }
        },
    );

    view! {
        <div class="page">
            <AppHeader/>
            <main class="page__main">
                <A href="/" attr:class="page__back">
                    "← Back to feed"
                </A>
                <Suspense fallback=|| view! { <p class="post-list__status">"Loading post..."</p> }>
                    {move || {
                        post.get()
                            .map(|result| match result {
                                Ok(Some(post)) => view! { <PostCard post=post expanded=true/> }.into_any(),
                                Ok(None) => view! { <p class="post-list__status">{NOT_FOUND}</p> }.into_any(),
                                Err(_) => {
                                    view! {
                                        <p class="post-list__status post-list__status--error">"Failed to load post."</p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}
