use super::*;

#[test]
fn feed_state_defaults_idle() {
    let s = FeedState::default();
    assert_eq!(s.refresh, 0);
    assert!(!s.composing);
}

#[test]
fn composer_opens_and_closes_without_refresh() {
    let mut s = FeedState::default();
    s.open_composer();
    assert!(s.composing);
    s.close_composer();
    assert!(!s.composing);
    assert_eq!(s.refresh, 0);
}

#[test]
fn post_created_closes_composer_and_bumps_refresh() {
    let mut s = FeedState::default();
    s.open_composer();
    s.post_created();
    s.open_composer();
    s.post_created();
    assert!(!s.composing);
    assert_eq!(s.refresh, 2);
}
