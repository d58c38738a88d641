use super::*;

fn session_expiring_at(expires_at: Option<i64>) -> Session {
    Session {
        access_token: "at".to_owned(),
        refresh_token: Some("rt".to_owned()),
        expires_in: None,
        expires_at,
        user: User { id: "u1".to_owned(), email: None },
    }
}

#[test]
fn token_url_carries_grant_type() {
    assert_eq!(token_url("https://x.test", "password"), "https://x.test/auth/v1/token?grant_type=password");
    assert_eq!(
        token_url("https://x.test", "refresh_token"),
        "https://x.test/auth/v1/token?grant_type=refresh_token"
    );
}

#[test]
fn auth_url_joins_auth_prefix() {
    assert_eq!(auth_url("https://x.test", "signup"), "https://x.test/auth/v1/signup");
}

#[test]
fn credentials_body_has_email_and_password() {
    assert_eq!(
        credentials_body("a@b.com", "hunter22"),
        serde_json::json!({"email": "a@b.com", "password": "hunter22"})
    );
}

#[test]
fn signup_response_with_tokens_is_a_session() {
    let body = serde_json::json!({
        "access_token": "at",
        "refresh_token": "rt",
        "user": {"id": "u1", "email": "a@b.com"}
    });
    let session = parse_signup_response(body).unwrap();
    assert_eq!(session.user.id, "u1");
}

#[test]
fn signup_session_gets_a_deadline() {
    let body = serde_json::json!({
        "access_token": "at",
        "expires_in": 3600,
        "user": {"id": "u1"}
    });
    let before = now_unix();
    let expires_at = parse_signup_response(body).unwrap().expires_at.unwrap();
    assert!(expires_at >= before + 3600);
}


#[test]
fn signup_response_without_tokens_means_confirmation_pending() {
    let body = serde_json::json!({"id": "u1", "email": "a@b.com", "confirmation_sent_at": "2024-01-01T00:00:00Z"});
    assert!(parse_signup_response(body).is_none());
}

#[cfg(not(feature = "csr"))]
#[test]
fn restore_session_without_stored_session_is_none() {
    let config = crate::config::AppConfig::from_values(None, None, None, None).unwrap().backend;
    assert!(futures::executor::block_on(restore_session(&config)).is_none());
}

#[test]
fn refresh_waits_until_margin_before_expiry() {
    let session = session_expiring_at(Some(10_000));
    assert_eq!(refresh_delay_ms(&session, 10_000 - 3600), Some((3600 - 60) * 1000));
}

#[test]
fn refresh_is_due_inside_margin_or_after_expiry() {
    let session = session_expiring_at(Some(10_000));
    assert_eq!(refresh_delay_ms(&session, 10_000 - 30), Some(0));
    assert_eq!(refresh_delay_ms(&session, 20_000), Some(0));
}

#[test]
fn session_without_expiry_has_no_refresh_schedule() {
    assert_eq!(refresh_delay_ms(&session_expiring_at(None), 0), None);
}

#[test]
fn far_future_expiry_saturates() {
    assert_eq!(refresh_delay_ms(&session_expiring_at(Some(i64::MAX)), 0), Some(u32::MAX));
}
