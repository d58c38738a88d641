use super::*;

// =============================================================
// Row decoding
// =============================================================

#[test]
fn post_row_decodes_with_null_optionals() {
    let raw = r#"{
        "id": "p1",
        "title": "Hello",
        "content": null,
        "image_url": null,
        "created_at": "2024-03-01T10:00:00.123456+00:00",
        "user_id": "u1"
    }"#;
    let post: Post = serde_json::from_str(raw).unwrap();
    assert_eq!(post.id, "p1");
    assert!(post.content.is_none());
    assert!(post.image_url.is_none());
}

#[test]
fn global_comment_row_decodes_without_post_id_column() {
    let raw = r#"{"id":"c1","content":"hi","created_at":"2024-03-01T10:00:00Z","user_id":"u1"}"#;
    let comment: Comment = serde_json::from_str(raw).unwrap();
    assert!(comment.post_id.is_none());
}

#[test]
fn session_decodes_auth_token_response() {
    let raw = r#"{
        "access_token": "at",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "rt",
        "user": {"id": "u1", "email": "a@b.com", "aud": "authenticated"}
    }"#;
    let session: Session = serde_json::from_str(raw).unwrap();
    assert_eq!(session.access_token, "at");
    assert_eq!(session.refresh_token.as_deref(), Some("rt"));
    assert_eq!(session.user.email.as_deref(), Some("a@b.com"));
    assert_eq!(session.expires_in, Some(3600));
    assert_eq!(session.expires_at, None);
}

#[test]
fn with_expiry_derives_deadline_from_lifetime() {
    let raw = r#"{"access_token": "at", "expires_in": 3600, "user": {"id": "u1"}}"#;
    let session: Session = serde_json::from_str(raw).unwrap();
    assert_eq!(session.with_expiry(1_000).expires_at, Some(4_600));
}

#[test]
fn with_expiry_keeps_issued_deadline() {
    let raw = r#"{"access_token": "at", "expires_in": 3600, "expires_at": 50, "user": {"id": "u1"}}"#;
    let session: Session = serde_json::from_str(raw).unwrap();
    assert_eq!(session.with_expiry(1_000).expires_at, Some(50));
}

// =============================================================
// Insert payloads
// =============================================================

#[test]
fn new_comment_omits_post_id_for_global_stream() {
    let payload = NewComment { user_id: "u1".to_owned(), content: "hi".to_owned(), post_id: None };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value, serde_json::json!({"user_id": "u1", "content": "hi"}));
}

#[test]
fn new_post_omits_absent_content_and_image() {
    let payload = NewPost { title: "T".to_owned(), content: None, image_url: None, user_id: "u1".to_owned() };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value, serde_json::json!({"title": "T", "user_id": "u1"}));
}

// =============================================================
// Profile display name
// =============================================================

#[test]
fn display_name_prefers_username() {
    let p = Profile { id: "u1".to_owned(), username: Some("ada".to_owned()), full_name: Some("Ada L".to_owned()) };
    assert_eq!(p.display_name(), Some("ada"));
}

#[test]
fn display_name_falls_back_to_full_name_when_username_blank() {
    let p = Profile { id: "u1".to_owned(), username: Some("  ".to_owned()), full_name: Some("Ada L".to_owned()) };
    assert_eq!(p.display_name(), Some("Ada L"));
}

#[test]
fn display_name_none_when_both_missing() {
    let p = Profile { id: "u1".to_owned(), username: None, full_name: None };
    assert_eq!(p.display_name(), None);
}
