//! Small display-name helpers shared by post and comment rows.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use crate::net::types::Profile;

pub const FALLBACK_INITIAL: &str = "U";
pub const FALLBACK_NAME: &str = "Anonymous";

/// Uppercased first character of `name`, or "U".
pub fn avatar_initial(name: Option<&str>) -> String {
    name.and_then(|n| n.trim().chars().next())
        .map_or_else(|| FALLBACK_INITIAL.to_owned(), |c| c.to_uppercase().collect())
}

pub fn profile_initial(profile: Option<&Profile>) -> String {
    avatar_initial(profile.and_then(Profile::display_name))
}

pub fn profile_name(profile: Option<&Profile>) -> String {
    profile
        .and_then(Profile::display_name)
        .unwrap_or(FALLBACK_NAME)
        .to_owned()
}
