pub mod courses;
pub mod inscriptions;
pub mod students;
pub mod users;

use crate::{error::SeedError, transport::Transport};
use models::{
    collection::Collection,
    record::{Created, Listed},
};
use serde::Serialize;

/// Posts one payload and pairs it with the id the service assigned.
///
/// Only the id is read from the `201 Created` body; the rest of the echo is
/// ignored, so a reformatted field cannot turn a created record into a failure.
///
/// # Arguments
/// * `transport` - The transport to post through
/// * `collection` - The collection to create the record in
/// * `payload` - The record, minus the fields the service generates
///
/// # Returns
/// The created record with its service-assigned id
pub(crate) async fn post<T, P>(
    transport: &T,
    collection: Collection,
    payload: &P,
) -> Result<Created<P>, SeedError>
where
    T: Transport + ?Sized,
    P: Serialize + Clone,
{
    let body = serde_json::to_value(payload)?;
    let created = transport.create(collection, body).await?;
    let Listed { id } = serde_json::from_value(created)?;

    Ok(Created {
        id,
        record: payload.clone(),
    })
}
