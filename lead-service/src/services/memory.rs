use crate::models::StoredDocument;
use crate::services::store::DocumentStore;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document as BsonDocument};
use service_core::error::AppError;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Which operations an [`InMemoryStore`] should fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FailureMode {
    #[default]
    None,
    /// Every operation fails with the given message.
    All(String),
    /// Only collection enumeration fails.
    Enumeration(String),
}

/// Process-local document store with MongoDB-like identifier assignment.
///
/// Backs the test suite; failures can be injected per operation.
pub struct InMemoryStore {
    name: String,
    collections: RwLock<BTreeMap<String, Vec<BsonDocument>>>,
    failure: FailureMode,
}

impl InMemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: RwLock::new(BTreeMap::new()),
            failure: FailureMode::None,
        }
    }

    pub fn with_failure(mut self, failure: FailureMode) -> Self {
        self.failure = failure;
        self
    }

    /// Creates an empty collection, as `db.createCollection` would.
    pub async fn create_collection(&self, name: &str) {
        self.collections
            .write()
            .await
            .entry(name.to_string())
            .or_default();
    }

    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map(Vec::len)
            .unwrap_or(0)
    }

    fn check(&self) -> Result<(), AppError> {
        match &self.failure {
            FailureMode::All(msg) => Err(AppError::DatabaseError(anyhow::anyhow!(msg.clone()))),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    fn database_name(&self) -> &str {
        &self.name
    }

    async fn insert(&self, collection: &str, mut document: BsonDocument) -> Result<String, AppError> {
        self.check()?;

        let existing = document.get("_id").map(|value| match value {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s.clone(),
            other => other.to_string(),
        });

        let id = match existing {
            Some(id) => id,
            None => {
                let oid = ObjectId::new();
                // `_id` goes first, matching the server's field order.
                let mut with_id = BsonDocument::new();
                with_id.insert("_id", oid);
                for (key, value) in document {
                    with_id.insert(key, value);
                }
                document = with_id;
                oid.to_hex()
            }
        };

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id)
    }

    async fn query(&self, collection: &str, limit: u32) -> Result<Vec<StoredDocument>, AppError> {
        self.check()?;

        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .take(limit as usize)
                    .cloned()
                    .map(StoredDocument::from_bson)
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.check()?;
        if let FailureMode::Enumeration(msg) = &self.failure {
            return Err(AppError::DatabaseError(anyhow::anyhow!(msg.clone())));
        }
        Ok(self.collections.read().await.keys().cloned().collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}
