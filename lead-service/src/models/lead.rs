use serde::{Deserialize, Serialize};
use validator::Validate;

/// Collection holding captured leads.
pub const LEAD_COLLECTION: &str = "lead";

/// A captured contact/interest record.
///
/// Only `name` and `email` are required, and only their presence is checked:
/// empty strings are accepted. Absent optional fields are stored as null.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Lead {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

impl Lead {
    /// Declared field names, in declaration order.
    pub const FIELDS: &'static [&'static str] =
        &["name", "email", "phone", "company", "message", "source"];

    pub fn field_names() -> Vec<String> {
        Self::FIELDS.iter().map(|f| f.to_string()).collect()
    }
}
