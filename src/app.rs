//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::config::AppConfig;
use crate::pages::{auth::AuthPage, index::IndexPage, post::PostPage};
use crate::state::auth::AuthState;
use crate::state::query::QueryClient;
use crate::state::toast::ToastState;

/// Root application component.
///
/// Provides the shared contexts, starts session restoration, and sets up
/// client-side routing. A malformed build configuration replaces the whole
/// app with an error screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = match AppConfig::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::error!("invalid configuration: {e}");
            return view! { <ConfigErrorScreen message=e.to_string()/> }.into_any();
        }
    };

    let auth = RwSignal::new(AuthState::resolving());
    let backend = config.backend.clone();

    provide_context(config);
    provide_context(auth);
    provide_context(QueryClient::new());
    provide_context(RwSignal::new(ToastState::default()));

    crate::components::spawn_task(async move {
        let session = crate::net::auth::restore_session(&backend).await;
        if let Some(session) = &session {
            leptos::logging::log!("restored session for {}", session.user.id);
        }
        auth.update(|a| a.resolve(session));
        #[cfg(feature = "csr")]
        keep_session_fresh(&backend, auth).await;
    });

    view! {
        <Title text="Forum"/>

        <Router>
            <Routes fallback=|| view! { <p class="page__not-found">"Page not found."</p> }>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=(StaticSegment("post"), ParamSegment("id")) view=PostPage/>
            </Routes>
        </Router>
        <Toaster/>
    }
    .into_any()
}

/// Upper bound on how long the refresh loop sleeps, so a session signed in
/// after load is picked up without its own timer.
#[cfg(feature = "csr")]
const SESSION_CHECK_MS: u32 = 30_000;

/// Refresh the access token shortly before it expires, for as long as the
/// app runs.
///
/// A refused refresh token (400/401) signs the user out; transient failures
/// are retried on the next check.
#[cfg(feature = "csr")]
async fn keep_session_fresh(backend: &crate::config::BackendConfig, auth: RwSignal<AuthState>) {
    use crate::net::auth::{now_unix, refresh_delay_ms, refresh_session};
    use crate::net::error::BackendError;
    use std::time::Duration;

    let pause = |ms: u32| gloo_timers::future::sleep(Duration::from_millis(u64::from(ms)));

    loop {
        let session = auth.with_untracked(|a| a.session.clone());
        let due = session.as_ref().and_then(|s| refresh_delay_ms(s, now_unix()));
        let (Some(session), Some(0)) = (session, due) else {
            pause(due.map_or(SESSION_CHECK_MS, |ms| ms.min(SESSION_CHECK_MS))).await;
            continue;
        };
        let Some(refresh_token) = session.refresh_token.as_deref() else {
            pause(SESSION_CHECK_MS).await;
            continue;
        };

        match refresh_session(backend, refresh_token).await {
            Ok(refreshed) => {
                let saved = refreshed.clone();
                if auth.try_update(|a| a.replace_refreshed(&session.access_token, refreshed)) == Some(true) {
                    crate::util::session_store::save(&saved);
                    leptos::logging::log!("refreshed session for {}", saved.user.id);
                }
            }
            Err(BackendError::Status { status: 400 | 401, message }) => {
                leptos::logging::warn!("refresh token refused: {message}");
                if auth.try_update(|a| a.expire(&session.access_token)) == Some(true) {
                    crate::util::session_store::clear();
                }
            }
            Err(e) => {
                leptos::logging::warn!("session refresh failed: {e}");
                pause(SESSION_CHECK_MS).await;
            }
        }
    }
}

#[component]
fn ConfigErrorScreen(message: String) -> impl IntoView {
    view! {
        <div class="config-error">
            <h1>"Configuration error"</h1>
            <p>"This build of the forum is misconfigured and cannot reach its backend."</p>
            <pre>{message}</pre>
        </div>
    }
}
