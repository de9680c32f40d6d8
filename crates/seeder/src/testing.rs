//! In-memory stand-in for a MockAPI project

use crate::{error::SeedError, transport::Transport};
use async_trait::async_trait;
use models::{
    collection::Collection,
    record::{Listed, RecordId},
};
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

#[derive(Default)]
struct FakeState {
    next_id: u64,
    records: HashMap<Collection, Vec<Value>>,
    creates: Vec<(Collection, Value)>,
    deletes: Vec<(Collection, RecordId)>,
    failing_lists: HashSet<Collection>,
    failing_deletes: HashSet<Collection>,
    failing_creates: HashMap<Collection, HashSet<usize>>,
    rejected_collections: HashSet<Collection>,
    echo_overrides: HashMap<Collection, Vec<(String, Value)>>,
}

impl FakeState {
    fn assign_id(&mut self) -> RecordId {
        self.next_id += 1;
        RecordId::from(self.next_id.to_string())
    }
}

/// A [`Transport`] that stores records in memory and hands out increasing ids
#[derive(Default)]
pub struct FakeTransport {
    state: Mutex<FakeState>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `count` records as if left over from an earlier run
    pub fn insert_existing(&self, collection: Collection, count: usize) -> Vec<RecordId> {
        let mut state = self.state.lock().unwrap();
        (0..count)
            .map(|_| {
                let id = state.assign_id();
                state
                    .records
                    .entry(collection)
                    .or_default()
                    .push(json!({ "id": id, "stale": true }));
                id
            })
            .collect()
    }

    /// Every list request on `collection` answers 500
    pub fn fail_lists(&self, collection: Collection) {
        self.state.lock().unwrap().failing_lists.insert(collection);
    }

    /// Every delete request on `collection` answers 404 and removes nothing
    pub fn fail_deletes(&self, collection: Collection) {
        self.state.lock().unwrap().failing_deletes.insert(collection);
    }

    /// Every create request on `collection` answers 400
    pub fn fail_creates(&self, collection: Collection) {
        self.state
            .lock()
            .unwrap()
            .rejected_collections
            .insert(collection);
    }

    /// The given create attempts (0-based, per collection) answer 400
    pub fn fail_create_attempts(&self, collection: Collection, attempts: &[usize]) {
        self.state
            .lock()
            .unwrap()
            .failing_creates
            .entry(collection)
            .or_default()
            .extend(attempts);
    }

    /// Replaces `field` in every `201` body returned for `collection`; the
    /// stored record keeps the value that was sent
    pub fn alter_echo(&self, collection: Collection, field: &str, value: Value) {
        self.state
            .lock()
            .unwrap()
            .echo_overrides
            .entry(collection)
            .or_default()
            .push((field.to_owned(), value));
    }

    /// Every delete request issued so far, in order
    pub fn deletes(&self) -> Vec<(Collection, RecordId)> {
        self.state.lock().unwrap().deletes.clone()
    }

    /// Bodies of every create request issued to `collection`, in order
    pub fn create_attempts(&self, collection: Collection) -> Vec<Value> {
        self.state
            .lock()
            .unwrap()
            .creates
            .iter()
            .filter(|(c, _)| *c == collection)
            .map(|(_, body)| body.clone())
            .collect()
    }

    /// Collections in the order create requests were issued
    pub fn create_order(&self) -> Vec<Collection> {
        let state = self.state.lock().unwrap();
        let mut order: Vec<Collection> = Vec::new();
        for (collection, _) in &state.creates {
            if order.last() != Some(collection) {
                order.push(*collection);
            }
        }
        order
    }

    /// Number of records currently held for `collection`
    pub fn stored(&self, collection: Collection) -> usize {
        self.stored_ids(collection).len()
    }

    pub fn stored_ids(&self, collection: Collection) -> Vec<RecordId> {
        self.state
            .lock()
            .unwrap()
            .records
            .get(&collection)
            .map(|records| {
                records
                    .iter()
                    .map(|r| serde_json::from_value(r["id"].clone()).unwrap())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn list(&self, collection: Collection) -> Result<Vec<Listed>, SeedError> {
        let state = self.state.lock().unwrap();
        if state.failing_lists.contains(&collection) {
            return Err(SeedError::UnexpectedStatus {
                collection,
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }

        let records = state.records.get(&collection).cloned().unwrap_or_default();
        Ok(serde_json::from_value(Value::Array(records))?)
    }

    async fn create(&self, collection: Collection, body: Value) -> Result<Value, SeedError> {
        let mut state = self.state.lock().unwrap();
        let attempt = state.creates.iter().filter(|(c, _)| *c == collection).count();
        state.creates.push((collection, body.clone()));

        let rejected = state.rejected_collections.contains(&collection)
            || state
                .failing_creates
                .get(&collection)
                .is_some_and(|attempts| attempts.contains(&attempt));
        if rejected {
            return Err(SeedError::UnexpectedStatus {
                collection,
                status: StatusCode::BAD_REQUEST,
            });
        }

        let mut created = body;
        let id = state.assign_id();
        if let Value::Object(fields) = &mut created {
            fields.insert("id".to_owned(), json!(id));
        }
        state
            .records
            .entry(collection)
            .or_default()
            .push(created.clone());

        let mut echo = created;
        if let (Some(overrides), Value::Object(fields)) =
            (state.echo_overrides.get(&collection), &mut echo)
        {
            for (field, value) in overrides {
                fields.insert(field.clone(), value.clone());
            }
        }

        Ok(echo)
    }

    async fn delete(&self, collection: Collection, id: &RecordId) -> Result<(), SeedError> {
        let mut state = self.state.lock().unwrap();
        state.deletes.push((collection, id.clone()));

        if state.failing_deletes.contains(&collection) {
            return Err(SeedError::UnexpectedStatus {
                collection,
                status: StatusCode::NOT_FOUND,
            });
        }

        if let Some(records) = state.records.get_mut(&collection) {
            records.retain(|r| r["id"] != json!(id));
        }

        Ok(())
    }
}
