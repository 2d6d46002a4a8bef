//! In-process document store.
//!
//! Implements the same outbound contract as the Mongo pool with top-level
//! equality filters, `$set` and `$setOnInsert`. Used to exercise the adapter
//! without a live database.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};

use crate::docstore::error::{StoreError, StoreErrorKind};
use crate::docstore::ports::{DocumentHandle, DocumentSessionPool};

#[derive(Clone, Default)]
pub struct InMemorySessionPool {
    docs: Arc<Mutex<Vec<Document>>>,
}

impl InMemorySessionPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the stored documents in insertion order.
    pub fn documents(&self) -> Vec<Document> {
        match self.docs.lock() {
            Ok(docs) => docs.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DocumentSessionPool for InMemorySessionPool {
    type Handle = InMemoryHandle;

    fn acquire(&self) -> Result<Self::Handle, StoreError> {
        Ok(InMemoryHandle {
            docs: Arc::clone(&self.docs),
        })
    }
}

pub struct InMemoryHandle {
    docs: Arc<Mutex<Vec<Document>>>,
}

impl InMemoryHandle {
    fn lock(&self) -> Result<MutexGuard<'_, Vec<Document>>, StoreError> {
        self.docs
            .lock()
            .map_err(|_| StoreError::new(StoreErrorKind::Other, "in-memory store lock poisoned"))
    }

    fn find_sync(
        &self,
        filter: &Document,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        let docs = self.lock()?;
        // Same convention as the server: 0 is unbounded, a negative limit
        // caps the result at its absolute value.
        let take = match limit {
            0 => usize::MAX,
            n => usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX),
        };
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);

        Ok(docs
            .iter()
            .filter(|doc| matches(doc, filter))
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    fn find_one_sync(&self, filter: &Document) -> Result<Document, StoreError> {
        let docs = self.lock()?;
        docs.iter()
            .find(|doc| matches(doc, filter))
            .cloned()
            .ok_or_else(StoreError::no_match)
    }

    fn upsert_sync(&self, filter: &Document, update: &Document) -> Result<(), StoreError> {
        let (set, set_on_insert) = split_update(update)?;
        let mut docs = self.lock()?;

        if let Some(existing) = docs.iter_mut().find(|doc| matches(doc, filter)) {
            apply(existing, set);
            return Ok(());
        }

        let mut inserted = Document::new();
        inserted.insert("_id", ObjectId::new());
        apply(&mut inserted, Some(filter));
        apply(&mut inserted, set);
        apply(&mut inserted, set_on_insert);
        docs.push(inserted);
        Ok(())
    }
}

fn matches(doc: &Document, filter: &Document) -> bool {
    filter.iter().all(|(field, value)| doc.get(field) == Some(value))
}

fn apply(target: &mut Document, fields: Option<&Document>) {
    if let Some(fields) = fields {
        for (field, value) in fields {
            target.insert(field.clone(), value.clone());
        }
    }
}

fn split_update(update: &Document) -> Result<(Option<&Document>, Option<&Document>), StoreError> {
    let mut set = None;
    let mut set_on_insert = None;

    for (operator, fields) in update {
        let fields = match fields {
            Bson::Document(fields) => fields,
            _ => {
                return Err(StoreError::new(
                    StoreErrorKind::Query,
                    format!("{operator} expects a document"),
                ))
            }
        };
        match operator.as_str() {
            "$set" => set = Some(fields),
            "$setOnInsert" => set_on_insert = Some(fields),
            other => {
                return Err(StoreError::new(
                    StoreErrorKind::Query,
                    format!("unsupported update operator: {other}"),
                ))
            }
        }
    }

    Ok((set, set_on_insert))
}

#[async_trait]
impl DocumentHandle for InMemoryHandle {
    async fn find(
        &self,
        filter: Document,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        self.find_sync(&filter, skip, limit)
    }

    async fn find_one(&self, filter: Document) -> Result<Document, StoreError> {
        self.find_one_sync(&filter)
    }

    async fn upsert(&self, filter: Document, update: Document) -> Result<(), StoreError> {
        self.upsert_sync(&filter, &update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    async fn seeded(statuses: &[&str]) -> InMemorySessionPool {
        let pool = InMemorySessionPool::new();
        let handle = pool.acquire().unwrap();
        for (i, status) in statuses.iter().enumerate() {
            handle
                .upsert(
                    doc! { "id": format!("dev-{i}") },
                    doc! { "$set": { "status": *status } },
                )
                .await
                .unwrap();
        }
        pool
    }

    #[tokio::test]
    async fn upsert_inserts_filter_fields_and_store_id() {
        let pool = seeded(&["pending"]).await;

        let docs = pool.documents();
        assert_eq!(docs.len(), 1);
        assert!(docs[0].get_object_id("_id").is_ok());
        assert_eq!(docs[0].get_str("id").unwrap(), "dev-0");
        assert_eq!(docs[0].get_str("status").unwrap(), "pending");
    }

    #[tokio::test]
    async fn set_on_insert_is_ignored_for_existing_documents() {
        let pool = seeded(&["pending"]).await;
        let handle = pool.acquire().unwrap();

        handle
            .upsert(
                doc! { "id": "dev-0" },
                doc! { "$setOnInsert": { "status": "accepted" } },
            )
            .await
            .unwrap();

        assert_eq!(pool.documents()[0].get_str("status").unwrap(), "pending");
    }

    #[tokio::test]
    async fn find_applies_skip_then_limit() {
        let pool = seeded(&["a", "a", "a", "a", "a"]).await;
        let handle = pool.acquire().unwrap();

        let docs = handle.find(Document::new(), 1, 2).await.unwrap();

        let ids: Vec<_> = docs.iter().map(|d| d.get_str("id").unwrap()).collect();
        assert_eq!(ids, vec!["dev-1", "dev-2"]);
    }

    #[tokio::test]
    async fn zero_limit_is_unbounded_and_negative_limit_caps() {
        let pool = seeded(&["a", "a", "a"]).await;
        let handle = pool.acquire().unwrap();

        assert_eq!(handle.find(Document::new(), 0, 0).await.unwrap().len(), 3);
        assert_eq!(handle.find(Document::new(), 0, -2).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn find_one_reports_no_match() {
        let pool = InMemorySessionPool::new();
        let handle = pool.acquire().unwrap();

        let err = handle.find_one(doc! { "id": "missing" }).await.unwrap_err();

        assert_eq!(err.kind(), StoreErrorKind::NoMatch);
    }

    #[tokio::test]
    async fn unsupported_operator_is_query_error() {
        let pool = InMemorySessionPool::new();
        let handle = pool.acquire().unwrap();

        let err = handle
            .upsert(doc! { "id": "dev-1" }, doc! { "$inc": { "n": 1 } })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), StoreErrorKind::Query);
        assert!(pool.documents().is_empty());
    }
}
