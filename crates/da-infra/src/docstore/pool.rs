use anyhow::{Context, Result};
use async_trait::async_trait;
use da_core::config::StoreConfig;
use futures::TryStreamExt;
use log::info;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};

use crate::docstore::error::StoreError;
use crate::docstore::ports::{DocumentHandle, DocumentSessionPool};

pub const DB_NAME: &str = "deviceadm";
pub const DEVICES_COLLECTION: &str = "devices";

/// Shared MongoDB session.
///
/// The driver pools connections internally, so cloning is cheap and every
/// clone talks to the same deployment.
#[derive(Clone, Debug)]
pub struct MongoSessionPool {
    client: Client,
}

/// Open the store session and verify it with a `ping`.
///
/// This function should be called **once at application startup**. The
/// driver connects lazily, so without the ping an unreachable endpoint would
/// only surface on the first store call.
pub async fn init_store_pool(config: &StoreConfig) -> Result<MongoSessionPool> {
    let client = Client::with_uri_str(&config.endpoint)
        .await
        .context("failed to open document store session")?;

    client
        .database(DB_NAME)
        .run_command(doc! { "ping": 1 })
        .await
        .context("failed to open document store session")?;

    info!("Document store session established (database: {})", DB_NAME);

    Ok(MongoSessionPool { client })
}

impl DocumentSessionPool for MongoSessionPool {
    type Handle = MongoHandle;

    fn acquire(&self) -> Result<Self::Handle, StoreError> {
        Ok(MongoHandle {
            collection: self.client.database(DB_NAME).collection(DEVICES_COLLECTION),
        })
    }
}

pub struct MongoHandle {
    collection: Collection<Document>,
}

#[async_trait]
impl DocumentHandle for MongoHandle {
    async fn find(
        &self,
        filter: Document,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        let cursor = self.collection.find(filter).skip(skip).limit(limit).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        Ok(docs)
    }

    async fn find_one(&self, filter: Document) -> Result<Document, StoreError> {
        self.collection
            .find_one(filter)
            .await?
            .ok_or_else(StoreError::no_match)
    }

    async fn upsert(&self, filter: Document, update: Document) -> Result<(), StoreError> {
        self.collection
            .update_one(filter, update)
            .upsert(true)
            .await?;
        Ok(())
    }
}
