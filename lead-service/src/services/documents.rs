//! Generic document helpers shared by every collection-backed endpoint.

use crate::models::StoredDocument;
use crate::services::store::DocumentStore;
use chrono::Utc;
use mongodb::bson::{self, DateTime as BsonDateTime};
use serde::Serialize;
use service_core::error::AppError;

/// Serializes `data`, stamps `created_at`/`updated_at` and inserts it.
///
/// Returns the identifier assigned by the store.
pub async fn create_document<T: Serialize>(
    store: &dyn DocumentStore,
    collection: &str,
    data: &T,
) -> Result<String, AppError> {
    let mut document = bson::to_document(data)?;

    let now = BsonDateTime::from_chrono(Utc::now());
    document.insert("created_at", now);
    document.insert("updated_at", now);

    let id = store.insert(collection, document).await?;
    tracing::info!(collection = %collection, id = %id, "Document created");
    Ok(id)
}

/// Fetches at most `limit` documents. A zero limit never reaches the store.
pub async fn get_documents(
    store: &dyn DocumentStore,
    collection: &str,
    limit: u32,
) -> Result<Vec<StoredDocument>, AppError> {
    if limit == 0 {
        return Ok(Vec::new());
    }
    store.query(collection, limit).await
}
