//! Comment input for one scope.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::interactions::comment::{
    ADD_FAILED, ADDED_DESCRIPTION, ADDED_TITLE, CommentSubmit, SIGN_IN_REQUIRED, submit_comment,
};
use crate::net::types::CommentScope;
use crate::state::auth::AuthState;
use crate::state::query::QueryClient;
use crate::state::toast::{ToastMessage, ToastState, notify};

/// Text area plus submit button. Renders nothing without a signed-in user.
///
/// `on_added` fires after a successful insert, before the toast.
#[component]
pub fn CommentComposer(scope: CommentScope, #[prop(into)] on_added: Callback<()>) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let queries = expect_context::<QueryClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let input = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let scope = StoredValue::new(scope);

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let text = input.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        let user = auth.with_untracked(|a| a.user().cloned());
        let client = super::rest_client(&config, auth);
        let scope = scope.get_value();
        busy.set(true);

        super::spawn_task(async move {
            match submit_comment(&client, user.as_ref(), &scope, &text).await {
                CommentSubmit::Skipped => {}
                CommentSubmit::NotAuthenticated => notify(toasts, ToastMessage::error(SIGN_IN_REQUIRED)),
                CommentSubmit::Posted { invalidate } => {
                    input.set(String::new());
                    on_added.run(());
                    queries.invalidate_all(&invalidate);
                    notify(toasts, ToastMessage::success(ADDED_TITLE, ADDED_DESCRIPTION));
                }
                CommentSubmit::Failed(_) => notify(toasts, ToastMessage::error(ADD_FAILED)),
            }
            busy.set(false);
        });
    });

    let blank = move || input.with(|s| s.trim().is_empty());

    view! {
        <Show when=move || auth.with(|a| a.user().is_some())>
            <form
                class="comment-composer"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <textarea
                    class="comment-composer__input"
                    rows="3"
                    placeholder="Write a comment..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                ></textarea>
                <div class="comment-composer__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get() || blank()>
                        {move || if busy.get() { "Posting..." } else { "Post Comment" }}
                    </button>
                </div>
            </form>
        </Show>
    }
}
