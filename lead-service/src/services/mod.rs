pub mod database;
pub mod diagnostics;
pub mod documents;
pub mod memory;
pub mod metrics;
pub mod store;

pub use database::MongoDb;
pub use diagnostics::{EnvPresence, HealthStatus};
pub use documents::{create_document, get_documents};
pub use memory::{FailureMode, InMemoryStore};
pub use self::metrics::{get_metrics, init_metrics};
pub use store::DocumentStore;
