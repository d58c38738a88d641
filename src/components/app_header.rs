//! Top bar with the app title and the session controls.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::AppConfig;
use crate::state::auth::AuthState;

#[component]
pub fn AppHeader() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = move || auth.with(|a| a.user().and_then(|u| u.email.clone()).unwrap_or_default());
    let signed_in = move || auth.with(|a| a.user().is_some());

    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        let token = auth.with_untracked(AuthState::access_token);
        let backend = config.backend.clone();
        auth.update(|a| a.resolve(None));
        super::spawn_task(async move {
            match token {
                Some(token) => crate::net::auth::sign_out(&backend, &token).await,
                None => crate::util::session_store::clear(),
            }
        });
    };

    view! {
        <header class="app-header">
            <div class="app-header__inner">
                <A href="/" attr:class="app-header__title">
                    "Forum"
                </A>
                <div class="app-header__session">
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <A href="/auth" attr:class="btn btn--primary">
                                    "Sign In"
                                </A>
                            }
                        }
                    >
                        <span class="app-header__welcome">"Welcome, " {email}</span>
                        <button class="btn btn--outline" on:click=on_sign_out.clone()>
                            "Sign Out"
                        </button>
                    </Show>
                </div>
            </div>
        </header>
    }
}
