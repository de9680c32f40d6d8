use crate::{report::CollectionCounts, transport::Transport};
use log::{debug, error, info};
use models::collection::Collection;

/// Removes every record from a collection, one delete request per record.
///
/// A failed listing is logged and reported as 0 so the caller can move on to
/// the next collection. Individual deletes are not verified: the returned
/// count is the number of records the listing returned, i.e. the deletions
/// attempted.
pub async fn delete_all<T>(transport: &T, collection: Collection) -> usize
where
    T: Transport + ?Sized,
{
    let records = match transport.list(collection).await {
        Ok(records) => records,
        Err(e) => {
            error!("Error deleting from /{collection}: {e}");
            return 0;
        }
    };

    info!("Deleting {} records from /{collection}...", records.len());

    for record in &records {
        if let Err(e) = transport.delete(collection, &record.id).await {
            debug!("Delete of /{collection}/{} not confirmed: {e}", record.id);
        }
    }

    info!("Deleted {} records from /{collection}", records.len());
    records.len()
}

/// Empties every collection in the fixed order
pub async fn purge_all<T>(transport: &T) -> CollectionCounts
where
    T: Transport + ?Sized,
{
    let mut deleted = CollectionCounts::default();
    for collection in Collection::all() {
        deleted.record(collection, delete_all(transport, collection).await);
    }

    deleted
}
