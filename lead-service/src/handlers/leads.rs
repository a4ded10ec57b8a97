use crate::dtos::{CreateLeadResponse, LeadListParams, LeadListResponse};
use crate::middleware::{ApiQuery, ValidatedJson};
use crate::models::{Lead, StoredDocument, LEAD_COLLECTION};
use crate::services::{create_document, get_documents, metrics};
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

pub async fn create_lead(
    State(state): State<AppState>,
    ValidatedJson(lead): ValidatedJson<Lead>,
) -> Result<Json<CreateLeadResponse>, AppError> {
    let store = state.require_store()?;

    let id = create_document(store, LEAD_COLLECTION, &lead)
        .await
        .map_err(|e| {
            metrics::record_store_error("insert");
            e
        })?;

    metrics::record_document_created(LEAD_COLLECTION);
    tracing::info!(lead_id = %id, "Lead captured");

    Ok(Json(CreateLeadResponse::ok(id)))
}

pub async fn list_leads(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<LeadListParams>,
) -> Result<Json<LeadListResponse>, AppError> {
    let limit = params.effective_limit();
    if limit == 0 {
        return Ok(Json(LeadListResponse { items: Vec::new() }));
    }

    let store = state.require_store()?;

    let docs = get_documents(store, LEAD_COLLECTION, limit)
        .await
        .map_err(|e| {
            metrics::record_store_error("query");
            e
        })?;

    Ok(Json(LeadListResponse {
        items: docs.into_iter().map(StoredDocument::normalize).collect(),
    }))
}
