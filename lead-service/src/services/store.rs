use crate::models::StoredDocument;
use async_trait::async_trait;
use mongodb::bson::Document as BsonDocument;
use service_core::error::AppError;

/// The operations the service needs from a document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the database this handle points at.
    fn database_name(&self) -> &str;

    /// Inserts `document` into `collection` and returns the assigned identifier.
    async fn insert(&self, collection: &str, document: BsonDocument) -> Result<String, AppError>;

    /// Returns at most `limit` documents in the store's natural order.
    async fn query(&self, collection: &str, limit: u32) -> Result<Vec<StoredDocument>, AppError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}
