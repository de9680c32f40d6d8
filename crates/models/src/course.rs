use crate::record::Created;
use serde::{Deserialize, Serialize};

/// Payload for creating a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub name: String,
    pub code: String,
    /// Total hours of instruction
    pub hours: u32,
    /// Number of classes
    pub classes: u32,
    pub professor: String,
    pub capacity: u32,
}

impl NewCourse {
    pub fn new(
        name: &str,
        code: &str,
        hours: u32,
        classes: u32,
        professor: &str,
        capacity: u32,
    ) -> Self {
        Self {
            name: name.to_owned(),
            code: code.to_owned(),
            hours,
            classes,
            professor: professor.to_owned(),
            capacity,
        }
    }

    /// The course name cut to at most `max_chars` characters
    pub fn short_name(&self, max_chars: usize) -> &str {
        match self.name.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.name[..idx],
            None => &self.name,
        }
    }
}

/// A course as stored by the service
pub type Course = Created<NewCourse>;
