//! Mutation flows tying backend writes to cache invalidation.
//!
//! ARCHITECTURE
//! ============
//! Each flow takes a [`DataClient`](crate::net::client::DataClient), the
//! current user, and the action's input, performs at most one backend write,
//! and returns an outcome naming the cache keys to invalidate. Components own
//! the side effects (toasts, clearing inputs, calling the query client), which
//! keeps the flows testable against the in-memory store.

pub mod account;
pub mod comment;
pub mod like;
pub mod post;
pub mod share;

use crate::net::types::User;
use crate::state::toast::ToastMessage;

/// Gate for actions that need a session. The error is the toast to show.
///
/// # Errors
///
/// Returns the authentication-required toast when `user` is `None`.
pub fn require_user<'a>(user: Option<&'a User>, message: &str) -> Result<&'a User, ToastMessage> {
    user.ok_or_else(|| ToastMessage::error(message))
}
