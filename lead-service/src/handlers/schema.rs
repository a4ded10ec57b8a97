use crate::dtos::{EntitySchema, SchemaResponse};
use crate::models::Lead;
use axum::Json;

pub fn lead_schema() -> SchemaResponse {
    SchemaResponse {
        lead: EntitySchema {
            fields: Lead::field_names(),
        },
    }
}

/// Declared entity fields, for viewers and tooling.
pub async fn get_schema() -> Json<SchemaResponse> {
    Json(lead_schema())
}
