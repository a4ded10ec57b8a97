use crate::models::NormalizedDocument;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIST_LIMIT: i64 = 20;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateLeadResponse {
    pub status: String,
    pub id: String,
}

impl CreateLeadResponse {
    pub fn ok(id: String) -> Self {
        Self {
            status: "ok".to_string(),
            id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LeadListParams {
    pub limit: Option<i64>,
}

impl LeadListParams {
    /// Requested limit; negative values are treated as zero.
    pub fn effective_limit(&self) -> u32 {
        let limit = self.limit.unwrap_or(DEFAULT_LIST_LIMIT);
        u32::try_from(limit.max(0)).unwrap_or(u32::MAX)
    }
}

#[derive(Debug, Serialize)]
pub struct LeadListResponse {
    pub items: Vec<NormalizedDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySchema {
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaResponse {
    pub lead: EntitySchema,
}
