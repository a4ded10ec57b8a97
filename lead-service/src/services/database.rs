use crate::models::StoredDocument;
use crate::services::store::DocumentStore;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document as BsonDocument},
    options::FindOptions,
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            // The URI may embed credentials, so it is never logged.
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub fn collection(&self, name: &str) -> Collection<BsonDocument> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl DocumentStore for MongoDb {
    fn database_name(&self) -> &str {
        self.db.name()
    }

    async fn insert(&self, collection: &str, document: BsonDocument) -> Result<String, AppError> {
        let result = self
            .collection(collection)
            .insert_one(document, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to insert document: {}", e);
                AppError::from(e)
            })?;

        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        })
    }

    async fn query(&self, collection: &str, limit: u32) -> Result<Vec<StoredDocument>, AppError> {
        // MongoDB treats a limit of 0 as "no limit".
        if limit == 0 {
            return Ok(Vec::new());
        }
        let find_options = FindOptions::builder().limit(i64::from(limit)).build();

        let mut cursor = self
            .collection(collection)
            .find(None, find_options)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to query documents: {}", e);
                AppError::from(e)
            })?;

        let mut documents = Vec::new();
        while let Some(doc) = cursor.try_next().await.map_err(AppError::from)? {
            documents.push(StoredDocument::from_bson(doc));
        }
        Ok(documents)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db.list_collection_names(None).await.map_err(|e| {
            tracing::warn!("Failed to list MongoDB collections: {}", e);
            AppError::from(e)
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
