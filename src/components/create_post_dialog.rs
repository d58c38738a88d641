//! Modal dialog for writing a new post with an optional image.

use leptos::html;
use leptos::prelude::*;

use crate::config::{AppConfig, BackendConfig};
use crate::interactions::post::{
    CREATE_FAILED, CREATED_DESCRIPTION, CREATED_TITLE, PostCreate, SIGN_IN_REQUIRED, create_post, validate_post,
};
use crate::net::client::RestClient;
use crate::net::error::BackendError;
use crate::net::types::Session;
use crate::state::auth::AuthState;
use crate::state::query::QueryClient;
use crate::state::toast::{ToastMessage, ToastState, notify};

/// Title, optional content, optional image. Closing (backdrop, Cancel) keeps
/// nothing; a failed submit keeps the dialog open with its inputs.
#[component]
pub fn CreatePostDialog(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_created: Callback<()>,
) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let queries = expect_context::<QueryClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let file_name = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let file_input = NodeRef::<html::Input>::new();

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let draft = match validate_post(&title.get_untracked(), &content.get_untracked()) {
            Ok(draft) => draft,
            Err(message) => {
                notify(toasts, ToastMessage::error(message));
                return;
            }
        };
        let Some(session) = auth.with_untracked(|a| a.session.clone()) else {
            notify(toasts, ToastMessage::error(SIGN_IN_REQUIRED));
            return;
        };
        let backend = config.backend.clone();
        busy.set(true);

        super::spawn_task(async move {
            let image_url = match upload_selected_image(&backend, &session, file_input).await {
                Ok(url) => url,
                Err(e) => {
                    leptos::logging::error!("Image upload error: {e}");
                    notify(toasts, ToastMessage::error(CREATE_FAILED));
                    busy.set(false);
                    return;
                }
            };
            let client = RestClient::new(backend, Some(session.access_token.clone()));
            match create_post(&client, Some(&session.user), draft, image_url).await {
                PostCreate::Created { invalidate, .. } => {
                    queries.invalidate_all(&invalidate);
                    notify(toasts, ToastMessage::success(CREATED_TITLE, CREATED_DESCRIPTION));
                    title.set(String::new());
                    content.set(String::new());
                    file_name.set(None);
                    on_created.run(());
                }
                PostCreate::NotAuthenticated => notify(toasts, ToastMessage::error(SIGN_IN_REQUIRED)),
                PostCreate::Failed(_) => notify(toasts, ToastMessage::error(CREATE_FAILED)),
            }
            busy.set(false);
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Post"</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="dialog__label">
                        "Title"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="What's on your mind?"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Content"
                        <textarea
                            class="dialog__input"
                            rows="5"
                            placeholder="Share more details (optional)"
                            prop:value=move || content.get()
                            on:input=move |ev| content.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="dialog__label">
                        "Image"
                        <input
                            class="dialog__input"
                            type="file"
                            accept="image/*"
                            node_ref=file_input
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                let name = value.rsplit(['/', '\\']).next().unwrap_or_default().to_owned();
                                file_name.set((!name.is_empty()).then_some(name));
                            }
                        />
                    </label>
                    <Show when=move || file_name.get().is_some()>
                        <p class="dialog__hint">{move || file_name.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating..." } else { "Create Post" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Upload the file chosen in `input`, if any, and return its public URL.
#[cfg(feature = "csr")]
async fn upload_selected_image(
    backend: &BackendConfig,
    session: &Session,
    input: NodeRef<html::Input>,
) -> Result<Option<String>, BackendError> {
    let file = input.get_untracked().and_then(|el| el.files()).and_then(|files| files.get(0));
    let Some(file) = file else {
        return Ok(None);
    };
    crate::net::storage::upload_post_image(backend, &session.access_token, &session.user.id, file)
        .await
        .map(Some)
}

#[cfg(not(feature = "csr"))]
#[allow(clippy::unused_async)]
async fn upload_selected_image(
    backend: &BackendConfig,
    session: &Session,
    input: NodeRef<html::Input>,
) -> Result<Option<String>, BackendError> {
    let _ = (backend, session, input);
    Err(BackendError::Unavailable)
}
