//! Landing page: the post feed for signed-in users, a call to action
//! otherwise.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders only a loading indicator until `App` has resolved the stored
//! session. Page-local [`FeedState`] tracks the create-post dialog and the
//! refresh trigger that re-keys the feed after a post is created.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::app_header::AppHeader;
use crate::components::comments_section::CommentsSection;
use crate::components::create_post_dialog::CreatePostDialog;
use crate::components::post_list::PostList;
use crate::config::{AppConfig, CommentMode};
use crate::net::types::CommentScope;
use crate::state::auth::{AuthState, SessionView};
use crate::state::feed::FeedState;

#[component]
pub fn IndexPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let global_comments = config.comment_mode == CommentMode::Global;

    let feed = RwSignal::new(FeedState::default());
    let session_view = Memo::new(move |_| auth.with(AuthState::view));
    let refresh = Signal::derive(move || feed.with(|f| f.refresh));

    let on_close = Callback::new(move |()| feed.update(FeedState::close_composer));
    let on_created = Callback::new(move |()| feed.update(FeedState::post_created));

    view! {
        <div class="page">
            <AppHeader/>
            <main class="page__main">
                {move || match session_view.get() {
                    SessionView::Loading => {
                        view! {
                            <div class="page__loading">
                                <div class="spinner" aria-hidden="true"></div>
                                <p>"Loading..."</p>
                            </div>
                        }
                            .into_any()
                    }
                    SessionView::Anonymous => {
                        view! {
                            <section class="hero">
                                <h2>"Welcome to Our Forum"</h2>
                                <p>"Join our community to share ideas, ask questions, and connect with others."</p>
                                <A href="/auth" attr:class="btn btn--primary btn--large">
                                    "Get Started"
                                </A>
                            </section>
                        }
                            .into_any()
                    }
                    SessionView::Authenticated => {
                        view! {
                            <PostList refresh=refresh/>
                            <Show when=move || global_comments>
                                <CommentsSection scope=CommentScope::Global/>
                            </Show>
                            <button
                                class="fab"
                                title="Create post"
                                aria-label="Create post"
                                on:click=move |_| feed.update(FeedState::open_composer)
                            >
                                "+"
                            </button>
                            <Show when=move || feed.with(|f| f.composing)>
                                <CreatePostDialog on_close=on_close on_created=on_created/>
                            </Show>
                        }
                            .into_any()
                    }
                }}
            </main>
        </div>
    }
}
