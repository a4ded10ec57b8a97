pub mod diagnostics;
pub mod health;
pub mod leads;
pub mod root;
pub mod schema;

pub use diagnostics::test_database;
pub use health::{health_check, metrics_endpoint, not_found, readiness_check};
pub use leads::{create_lead, list_leads};
pub use root::{hello, root};
pub use schema::get_schema;
