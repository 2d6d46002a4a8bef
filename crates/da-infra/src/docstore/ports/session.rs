use async_trait::async_trait;
use mongodb::bson::Document;

use crate::docstore::error::StoreError;

/// Long-lived session shared by every store call.
pub trait DocumentSessionPool: Send + Sync {
    type Handle: DocumentHandle;

    /// Derive a short-lived handle on the devices collection.
    ///
    /// Dropping the handle releases it back to the pool.
    fn acquire(&self) -> Result<Self::Handle, StoreError>;
}

/// One collection handle. Each method is a single store round trip.
#[async_trait]
pub trait DocumentHandle: Send + Sync {
    async fn find(
        &self,
        filter: Document,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError>;

    /// Fails with [`StoreErrorKind::NoMatch`](crate::docstore::StoreErrorKind::NoMatch)
    /// when nothing matches.
    async fn find_one(&self, filter: Document) -> Result<Document, StoreError>;

    /// Update the first match with `update`, or insert a new document built
    /// from the filter's equality fields and `update`.
    async fn upsert(&self, filter: Document, update: Document) -> Result<(), StoreError>;
}
