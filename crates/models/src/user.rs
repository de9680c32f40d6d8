use crate::record::Created;
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

/// Payload for creating an application login.
///
/// Passwords are sent in plaintext; the demo backend does no hashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

impl NewUser {
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Self {
        Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// A user as stored by the service
pub type User = Created<NewUser>;
