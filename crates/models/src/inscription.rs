use crate::record::{Created, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Lifecycle state of an enrollment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InscriptionStatus {
    Active,
    Completed,
    Cancelled,
}

/// Payload for enrolling a student in a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInscription {
    pub student_id: RecordId,
    pub course_id: RecordId,
    pub enrollment_date: DateTime<Utc>,
    pub status: InscriptionStatus,
}

/// An inscription as stored by the service
pub type Inscription = Created<NewInscription>;
