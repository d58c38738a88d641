//! Composer plus list for one comment scope.

use leptos::prelude::*;

use super::comment_composer::CommentComposer;
use super::comment_list::CommentList;
use crate::net::types::CommentScope;

/// The composer bumps a local refresh counter on every added comment, which
/// re-keys the list alongside the cache invalidation.
#[component]
pub fn CommentsSection(scope: CommentScope) -> impl IntoView {
    let refresh = RwSignal::new(0_u64);
    let heading = match scope {
        CommentScope::Global => "Discussion",
        CommentScope::Post(_) => "Comments",
    };

    view! {
        <section class="comments-section">
            <h3 class="comments-section__title">{heading}</h3>
            <CommentComposer scope=scope.clone() on_added=move |()| refresh.update(|n| *n += 1)/>
            <CommentList scope=scope refresh=refresh/>
        </section>
    }
}
