//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the landing page gate, the header, and every mutation handler to
//! decide between "authentication required" and an actual backend call.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Session, User};

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

/// Top-level gate derived from [`AuthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionView {
    Loading,
    Anonymous,
    Authenticated,
}

impl AuthState {
    /// Initial state on page load, before the stored session is checked.
    pub fn resolving() -> Self {
        Self { session: None, loading: true }
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn access_token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.access_token.clone())
    }

    pub fn view(&self) -> SessionView {
        if self.loading {
            SessionView::Loading
        } else if self.session.is_some() {
            SessionView::Authenticated
        } else {
            SessionView::Anonymous
        }
    }

    /// Finish resolution with whatever the session provider returned.
    pub fn resolve(&mut self, session: Option<Session>) {
        self.session = session;
        self.loading = false;
    }

    /// Swap in a refreshed session, unless the session it replaces is no
    /// longer current (the user signed out or in again meanwhile).
    pub fn replace_refreshed(&mut self, previous_token: &str, refreshed: Session) -> bool {
        if self.access_token().as_deref() != Some(previous_token) {
            return false;
        }
        self.session = Some(refreshed);
        true
    }

    /// Drop a session the auth service refused to refresh, under the same
    /// currency rule as [`Self::replace_refreshed`].
    pub fn expire(&mut self, previous_token: &str) -> bool {
        if self.access_token().as_deref() != Some(previous_token) {
            return false;
        }
        self.session = None;
        true
    }
}
