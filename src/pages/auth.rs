//! Email + password sign-in and sign-up page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::AppConfig;
use crate::interactions::account::{
    AUTH_FAILED, AuthMode, AuthOutcome, CONFIRM_EMAIL, SIGNED_IN, SIGNED_UP, authenticate, validate_credentials,
};
use crate::state::auth::AuthState;
use crate::state::toast::{ToastMessage, ToastState, notify};

/// Redirects to `/` once a session exists, including when opened while
/// already signed in.
#[component]
pub fn AuthPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let mode = RwSignal::new(AuthMode::SignIn);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if auth.with(|a| a.user().is_some()) {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let current_mode = mode.get_untracked();
        let backend = config.backend.clone();
        busy.set(true);
        info.set(String::new());

        crate::components::spawn_task(async move {
            match authenticate(&backend, current_mode, &credentials).await {
                AuthOutcome::SignedIn(session) => {
                    let title = match current_mode {
                        AuthMode::SignIn => SIGNED_IN,
                        AuthMode::SignUp => SIGNED_UP,
                    };
                    notify(toasts, ToastMessage::info(title));
                    auth.update(|a| a.resolve(Some(session)));
                }
                AuthOutcome::ConfirmationPending => {
                    info.set(CONFIRM_EMAIL.to_owned());
                    notify(toasts, ToastMessage::success(SIGNED_UP, CONFIRM_EMAIL));
                    mode.set(AuthMode::SignIn);
                }
                AuthOutcome::Failed => notify(toasts, ToastMessage::error(AUTH_FAILED)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Forum"</h1>
                <p class="login-card__subtitle">
                    {move || match mode.get() {
                        AuthMode::SignIn => "Sign in to your account",
                        AuthMode::SignUp => "Create a new account",
                    }}
                </p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Please wait..." } else { mode.get().label() }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <button
                    class="login-switch"
                    type="button"
                    on:click=move |_| {
                        mode.update(|m| *m = m.toggled());
                        info.set(String::new());
                    }
                >
                    {move || match mode.get() {
                        AuthMode::SignIn => "Don't have an account? Sign up",
                        AuthMode::SignUp => "Already have an account? Sign in",
                    }}
                </button>
                <A href="/" attr:class="login-back">
                    "Back to forum"
                </A>
            </div>
        </div>
    }
}
