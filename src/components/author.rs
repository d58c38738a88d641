//! Author identity resolved from `profiles`.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::net::client::DataClient;
use crate::net::error::BackendError;
use crate::net::types::Profile;
use crate::state::auth::AuthState;
use crate::state::query::use_query;
use crate::state::query_cache::QueryKey;
use crate::util::display::{profile_initial, profile_name};

/// Cached profile lookup for `user_id`. Rows without a profile resolve to
/// `Ok(None)`.
pub fn use_profile(user_id: String) -> LocalResource<Result<Option<Profile>, BackendError>> {
    let config = expect_context::<AppConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let key = QueryKey::profile(&user_id);

    use_query(
        move || key.clone(),
        move |_| {
            let client = super::rest_client(&config, auth);
            let user_id = user_id.clone();
            async move { client.fetch_profile(&user_id).await }
        },
    )
}

/// Initial-letter avatar; "U" until (or unless) the profile has a name.
#[component]
pub fn AuthorAvatar(user_id: String) -> impl IntoView {
    let profile = use_profile(user_id);
    let initial = move || profile_initial(profile.get().and_then(Result::ok).flatten().as_ref());

    view! { <span class="avatar" aria-hidden="true">{initial}</span> }
}

/// Avatar plus display name, used in post headers.
#[component]
pub fn AuthorBadge(user_id: String) -> impl IntoView {
    let profile = use_profile(user_id);
    let resolved = move || profile.get().and_then(Result::ok).flatten();

    view! {
        <span class="avatar" aria-hidden="true">{move || profile_initial(resolved().as_ref())}</span>
        <span class="author-name">{move || profile_name(resolved().as_ref())}</span>
    }
}
