use futures::executor::block_on;

use super::*;
use crate::config::AppConfig;

#[test]
fn mode_toggles_and_labels() {
    assert_eq!(AuthMode::default(), AuthMode::SignIn);
    assert_eq!(AuthMode::SignIn.toggled(), AuthMode::SignUp);
    assert_eq!(AuthMode::SignUp.toggled().label(), "Sign In");
}

#[test]
fn credentials_are_trimmed() {
    let creds = validate_credentials("  a@b.test ", "secret1").unwrap();
    assert_eq!(creds.email, "a@b.test");
    assert_eq!(creds.password, "secret1");
}

#[test]
fn password_keeps_surrounding_whitespace() {
    assert_eq!(validate_credentials("a@b.test", " pass ").unwrap().password, " pass ");
}

#[test]
fn missing_fields_are_rejected() {
    assert!(validate_credentials("   ", "secret1").is_err());
    assert!(validate_credentials("a@b.test", "").is_err());
}

#[test]
fn short_password_is_rejected() {
    assert_eq!(validate_credentials("a@b.test", "12345"), Err("Password must be at least 6 characters."));
    assert!(validate_credentials("a@b.test", "123456").is_ok());
}

#[test]
fn email_without_at_sign_is_rejected() {
    assert!(validate_credentials("nobody", "secret1").is_err());
}

#[test]
fn authenticate_fails_outside_browser() {
    let config = AppConfig::from_values(None, None, None, None).unwrap();
    let creds = validate_credentials("a@b.test", "secret1").unwrap();
    assert_eq!(block_on(authenticate(&config.backend, AuthMode::SignIn, &creds)), AuthOutcome::Failed);
    assert_eq!(block_on(authenticate(&config.backend, AuthMode::SignUp, &creds)), AuthOutcome::Failed);
}
