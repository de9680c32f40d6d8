use serde::{Deserialize, Deserializer, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::Deref,
};

/// Identifier assigned to a record by the remote service.
///
/// MockAPI hands out ids as JSON strings (`"1"`), but numeric ids are
/// accepted too and normalised to their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => RecordId(id),
            RawId::Number(id) => RecordId(id.to_string()),
        })
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId(id.to_owned())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId(id)
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// A record as returned by the service after creation: the submitted
/// payload plus the id the service assigned to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Created<T> {
    pub id: RecordId,
    #[serde(flatten)]
    pub record: T,
}

impl<T> Deref for Created<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.record
    }
}

/// The minimal shape of a listed record: only the id is needed to delete it
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listed {
    pub id: RecordId,
}
