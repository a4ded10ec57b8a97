pub mod leads;

pub use leads::{
    CreateLeadResponse, EntitySchema, LeadListParams, LeadListResponse, SchemaResponse,
    DEFAULT_LIST_LIMIT,
};
