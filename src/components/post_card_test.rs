use super::*;

#[test]
fn expanded_card_opens_once_a_user_appears() {
    assert!(!opens_comments(true, false, false));
    assert!(opens_comments(true, true, false));
}

#[test]
fn feed_card_never_opens_by_itself() {
    assert!(!opens_comments(false, true, false));
}

#[test]
fn later_session_changes_do_not_reopen() {
    assert!(!opens_comments(true, true, true));
}
