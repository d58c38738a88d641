use futures::executor::block_on;

use super::*;
use crate::net::memory::MemoryStore;

fn user(id: &str) -> User {
    User { id: id.to_owned(), email: None }
}

fn summary(store: &MemoryStore, post_id: &str, user_id: &str) -> LikeSummary {
    let likes = block_on(store.list_likes(post_id)).unwrap();
    summarize_likes(&likes, Some(user_id))
}

// =============================================================
// Aggregation
// =============================================================

#[test]
fn summary_counts_all_likers_and_flags_current_user() {
    let likes = vec![
        Like { id: "l1".to_owned(), post_id: "P1".to_owned(), user_id: "U1".to_owned() },
        Like { id: "l2".to_owned(), post_id: "P1".to_owned(), user_id: "U2".to_owned() },
    ];
    assert_eq!(summarize_likes(&likes, Some("U2")), LikeSummary { count: 2, liked: true });
    assert_eq!(summarize_likes(&likes, Some("U3")), LikeSummary { count: 2, liked: false });
    assert_eq!(summarize_likes(&likes, None), LikeSummary { count: 2, liked: false });
}

#[test]
fn summary_of_no_likes_is_zero() {
    assert_eq!(summarize_likes(&[], Some("U1")), LikeSummary::default());
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn unauthenticated_toggle_makes_no_call() {
    let store = MemoryStore::new();
    assert_eq!(block_on(toggle_like(&store, None, "P1", false)), LikeToggle::NotAuthenticated);
    assert_eq!(store.call_count(), 0);
}

#[test]
fn like_inserts_and_invalidates_post_likes() {
    let store = MemoryStore::new();
    let outcome = block_on(toggle_like(&store, Some(&user("U1")), "P1", false));
    assert_eq!(outcome, LikeToggle::Liked { invalidate: vec![QueryKey::likes("P1")] });
    assert_eq!(summary(&store, "P1", "U1"), LikeSummary { count: 1, liked: true });
}

#[test]
fn toggling_twice_restores_original_state() {
    let store = MemoryStore::new();
    block_on(toggle_like(&store, Some(&user("U2")), "P1", false));
    let before = summary(&store, "P1", "U1");

    let u1 = user("U1");
    let first = block_on(toggle_like(&store, Some(&u1), "P1", before.liked));
    assert!(matches!(first, LikeToggle::Liked { .. }));
    let mid = summary(&store, "P1", "U1");
    assert_eq!(mid, LikeSummary { count: before.count + 1, liked: true });

    let second = block_on(toggle_like(&store, Some(&u1), "P1", mid.liked));
    assert!(matches!(second, LikeToggle::Unliked { .. }));
    assert_eq!(summary(&store, "P1", "U1"), before);
    assert!(!summary(&store, "P1", "U1").liked);
}

#[test]
fn unlike_only_removes_current_users_like() {
    let store = MemoryStore::new();
    block_on(toggle_like(&store, Some(&user("U1")), "P1", false));
    block_on(toggle_like(&store, Some(&user("U2")), "P1", false));
    block_on(toggle_like(&store, Some(&user("U1")), "P1", true));
    assert_eq!(summary(&store, "P1", "U2"), LikeSummary { count: 1, liked: true });
}

#[test]
fn stale_double_like_is_rejected_by_store() {
    let store = MemoryStore::new();
    let u1 = user("U1");
    block_on(toggle_like(&store, Some(&u1), "P1", false));
    let outcome = block_on(toggle_like(&store, Some(&u1), "P1", false));
    assert!(matches!(outcome, LikeToggle::Failed(BackendError::Status { status: 409, .. })));
    assert_eq!(summary(&store, "P1", "U1").count, 1);
}
