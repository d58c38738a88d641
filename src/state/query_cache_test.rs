use super::*;

fn post_scope(id: &str) -> CommentScope {
    CommentScope::Post(id.to_owned())
}

fn filled(key: &QueryKey, value: i32) -> QueryCache<i32> {
    let mut cache = QueryCache::default();
    let generation = cache.begin_fetch(key);
    cache.complete_fetch(key, value, generation);
    cache
}

// =============================================================
// Keys
// =============================================================

#[test]
fn comment_list_key_falls_under_scope_prefix() {
    let key = QueryKey::comments(&post_scope("P1"), 3);
    assert!(key.matches(&QueryKey::comments_scope(&post_scope("P1"))));
    assert!(key.matches(&QueryKey::new(QueryKind::Comments)));
    assert!(!key.matches(&QueryKey::comments_scope(&post_scope("P2"))));
}

#[test]
fn keys_of_different_kinds_never_match() {
    let count = QueryKey::comment_count("P1");
    assert!(!count.matches(&QueryKey::comments_scope(&post_scope("P1"))));
    assert!(!QueryKey::likes("P1").matches(&QueryKey::new(QueryKind::Profile)));
}

#[test]
fn global_scope_uses_its_own_segment() {
    assert_eq!(QueryKey::comments(&CommentScope::Global, 0).scope, vec!["global".to_owned(), "0".to_owned()]);
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn unknown_key_is_stale_with_generation_zero() {
    let cache: QueryCache<i32> = QueryCache::default();
    let key = QueryKey::likes("P1");
    assert!(cache.is_stale(&key));
    assert_eq!(cache.generation(&key), 0);
    assert!(cache.fresh(&key).is_none());
}

#[test]
fn completed_fetch_is_served_fresh() {
    let key = QueryKey::likes("P1");
    let cache = filled(&key, 7);
    assert_eq!(cache.fresh(&key), Some(&7));
    assert!(!cache.is_stale(&key));
}

#[test]
fn pending_fetch_has_no_data() {
    let mut cache: QueryCache<i32> = QueryCache::default();
    let key = QueryKey::post("P1");
    cache.begin_fetch(&key);
    assert_eq!(cache.len(), 1);
    assert!(cache.fresh(&key).is_none());
}

// =============================================================
// Invalidation
// =============================================================

#[test]
fn invalidate_marks_stale_and_bumps_generation() {
    let key = QueryKey::comment_count("P123");
    let cache = filled(&key, 2).invalidate(&key);
    let entry = cache.entry(&key).unwrap();
    assert!(entry.stale);
    assert_eq!(entry.generation, 1);
    assert_eq!(entry.data, Some(2));
    assert!(cache.fresh(&key).is_none());
}

#[test]
fn invalidate_by_prefix_leaves_other_scopes_fresh() {
    let p1 = QueryKey::comments(&post_scope("P1"), 0);
    let p1_later = QueryKey::comments(&post_scope("P1"), 1);
    let p2 = QueryKey::comments(&post_scope("P2"), 0);
    let mut cache = filled(&p1, 1);
    for key in [&p1_later, &p2] {
        let generation = cache.begin_fetch(key);
        cache.complete_fetch(key, 1, generation);
    }

    let cache = cache.invalidate(&QueryKey::comments_scope(&post_scope("P1")));
    assert!(cache.is_stale(&p1));
    assert!(cache.is_stale(&p1_later));
    assert_eq!(cache.fresh(&p2), Some(&1));
}

#[test]
fn invalidate_is_a_noop_for_unmatched_prefix() {
    let key = QueryKey::likes("P1");
    let before = filled(&key, 1);
    let after = before.clone().invalidate(&QueryKey::likes("P9"));
    assert_eq!(before, after);
}

#[test]
fn fetch_racing_an_invalidation_lands_stale() {
    let key = QueryKey::likes("P1");
    let mut cache = filled(&key, 1);
    cache = cache.invalidate(&key);

    let started = cache.begin_fetch(&key);
    cache = cache.invalidate(&key);
    cache.complete_fetch(&key, 2, started);

    assert!(cache.is_stale(&key));
    assert_eq!(cache.entry(&key).unwrap().data, Some(2));

    let restarted = cache.begin_fetch(&key);
    cache.complete_fetch(&key, 3, restarted);
    assert_eq!(cache.fresh(&key), Some(&3));
}
