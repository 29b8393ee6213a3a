use crate::error::AppError;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    Client as MongoClient, Database,
};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Gateway to a document database: insert into a named collection, and a
/// best-effort listing probe for diagnostics. Inserts are single writes,
/// surfaced on failure rather than retried.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts `payload` into `collection` and returns the new document id.
    async fn create_document(
        &self,
        collection: &str,
        payload: Document,
    ) -> Result<String, AppError>;

    /// Lists up to `limit` collection names. Diagnostics only; a failure
    /// means the store is degraded, never that the process should die.
    async fn list_collection_names(&self, limit: usize) -> Result<Vec<String>, AppError>;
}

#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to initialize MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Document store handle created");
        Ok(Self { db })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn create_document(
        &self,
        collection: &str,
        mut payload: Document,
    ) -> Result<String, AppError> {
        let id = Uuid::new_v4().to_string();
        payload.insert("_id", &id);

        self.db
            .collection::<Document>(collection)
            .insert_one(payload, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Insert failed: {}", e);
                AppError::from(e)
            })?;

        Ok(id)
    }

    async fn list_collection_names(&self, limit: usize) -> Result<Vec<String>, AppError> {
        let mut names = self.db.list_collection_names(None).await.map_err(|e| {
            tracing::warn!("Listing collections failed: {}", e);
            AppError::from(e)
        })?;
        names.truncate(limit);
        Ok(names)
    }
}

/// In-memory implementation for tests: same contract, no external store.
#[derive(Default)]
pub struct InMemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a collection's documents, in insertion order.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn create_document(
        &self,
        collection: &str,
        mut payload: Document,
    ) -> Result<String, AppError> {
        let id = Uuid::new_v4().to_string();
        payload.insert("_id", &id);

        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(payload);

        Ok(id)
    }

    async fn list_collection_names(&self, limit: usize) -> Result<Vec<String>, AppError> {
        let mut names: Vec<String> = self.collections.lock().unwrap().keys().cloned().collect();
        names.sort();
        names.truncate(limit);
        Ok(names)
    }
}
