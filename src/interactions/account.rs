//! Sign-in / sign-up form handling for the auth page.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use crate::config::BackendConfig;
use crate::net::types::Session;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const AUTH_FAILED: &str = "Authentication failed.";
pub const CONFIRM_EMAIL: &str = "Check your email to confirm your account.";
pub const SIGNED_IN: &str = "Welcome back!";
pub const SIGNED_UP: &str = "Account created!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Trim the email and check both fields.
///
/// # Errors
///
/// Returns the message to show inline when a field is missing or the
/// password is too short.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Email and password are required.");
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[derive(Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// A session was issued and persisted.
    SignedIn(Session),
    /// Account created; the user must confirm their email first.
    ConfirmationPending,
    Failed,
}

/// Run the form submission for `mode` and persist any resulting session.
pub async fn authenticate(config: &BackendConfig, mode: AuthMode, credentials: &Credentials) -> AuthOutcome {
    let result = match mode {
        AuthMode::SignIn => {
            crate::net::auth::sign_in_with_password(config, &credentials.email, &credentials.password)
                .await
                .map(Some)
        }
        AuthMode::SignUp => crate::net::auth::sign_up(config, &credentials.email, &credentials.password).await,
    };
    match result {
        Ok(Some(session)) => {
            crate::util::session_store::save(&session);
            AuthOutcome::SignedIn(session)
        }
        Ok(None) => AuthOutcome::ConfirmationPending,
        Err(e) => {
            leptos::logging::error!("{} error: {e}", mode.label());
            AuthOutcome::Failed
        }
    }
}
