//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the navigation bar, the tab guard and the table's delete column.
//! Filled once per page load from `GET /users/me` and cleared on logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserInfo;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Only superusers see the delete action.
    pub fn can_delete(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_superuser)
    }
}

/// Which login field an error message belongs under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Passcode,
}

/// Map a failed registration status to a field message.
///
/// Other statuses have no visible feedback.
pub fn registration_error(status: u16) -> Option<(LoginField, &'static str)> {
    match status {
        422 => Some((LoginField::Email, "Invalid email.")),
        400 => Some((LoginField::Passcode, "Incorrect passcode.")),
        _ => None,
    }
}
