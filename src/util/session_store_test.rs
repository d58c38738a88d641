use super::*;
use crate::net::types::User;

fn session() -> Session {
    Session {
        access_token: "at".to_owned(),
        refresh_token: Some("rt".to_owned()),
        expires_in: None,
        expires_at: None,
        user: User { id: "u1".to_owned(), email: Some("a@b.com".to_owned()) },
    }
}

#[test]
fn encoded_session_decodes_back() {
    let raw = encode(&session()).unwrap();
    assert_eq!(decode(&raw), Some(session()));
}

#[test]
fn decode_ignores_corrupt_values() {
    assert_eq!(decode("{not json"), None);
    assert_eq!(decode(r#"{"access_token":"at"}"#), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_store_is_always_empty() {
    save(&session());
    assert!(load().is_none());
    clear();
}
