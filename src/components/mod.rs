//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared contexts provided by `App` (config, auth state,
//! query client, toasts), fetch through `state::query::use_query`, and hand
//! mutations to `interactions`, applying the returned invalidations and
//! toasts.

pub mod app_header;
pub mod author;
pub mod comment_composer;
pub mod comment_list;
pub mod comments_section;
pub mod create_post_dialog;
pub mod post_card;
pub mod post_list;
pub mod toaster;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::net::client::RestClient;
use crate::state::auth::AuthState;

/// Data client carrying the current session's token, or the anon key.
pub(crate) fn rest_client(config: &AppConfig, auth: RwSignal<AuthState>) -> RestClient {
    RestClient::new(config.backend.clone(), auth.with_untracked(AuthState::access_token))
}

/// Run `task` on the browser event loop. Native builds never mount views, so
/// the task is dropped there.
pub(crate) fn spawn_task(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "csr"))]
    drop(task);
}
