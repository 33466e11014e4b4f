//! Session Model
//!
//! What the client knows about the server-side session. The cookie itself
//! lives in the HTTP client.

use crate::api::AuthStatus;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionModel {
    pub logged_in: bool,
    pub username: Option<String>,

    /// Whether the startup session check has answered
    pub checked: bool,
}

impl SessionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_status(&mut self, status: &AuthStatus) {
        self.logged_in = status.logged_in;
        self.username = if status.logged_in {
            status.username.clone()
        } else {
            None
        };
        self.checked = true;
    }

    pub fn sign_out(&mut self) {
        self.logged_in = false;
        self.username = None;
    }

    /// Name shown in the header
    pub fn display_name(&self) -> &str {
        match (&self.username, self.logged_in) {
            (Some(name), true) => name,
            (None, true) => "signed in",
            (_, false) => "not signed in",
        }
    }
}
