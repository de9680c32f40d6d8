use crate::record::Created;
use serde::{Deserialize, Serialize};

/// Payload for creating a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub email: String,
}

impl NewStudent {
    /// Builds a student whose email is derived from their name
    pub fn new(first_name: &str, last_name: &str, age: u8) -> Self {
        Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            age,
            email: Self::email_for(first_name, last_name),
        }
    }

    /// `first.last@email.com`, lower-cased
    pub fn email_for(first_name: &str, last_name: &str) -> String {
        format!(
            "{}.{}@email.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        )
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A student as stored by the service
pub type Student = Created<NewStudent>;
