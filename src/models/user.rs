//! User models for session authentication.

use serde::{Deserialize, Serialize};

/// The authenticated user carried in the session after login.
///
/// Only id and email are kept; the password never leaves the login handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: i32,
    pub email: String,
}

impl Principal {
    pub fn new(id: i32, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}
