pub mod document;
pub mod lead;

pub use document::{NormalizedDocument, StoreValue, StoredDocument};
pub use lead::{Lead, LEAD_COLLECTION};
