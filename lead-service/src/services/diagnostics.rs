//! Best-effort connectivity report served on `/test`.
//!
//! Each probe yields its own `Result`; [`HealthStatus::assemble`] folds them into
//! human-readable strings, so building a report cannot fail.

use crate::services::store::DocumentStore;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

pub const MAX_REPORTED_COLLECTIONS: usize = 10;
pub const MAX_ERROR_CHARS: usize = 50;

const BACKEND_RUNNING: &str = "✅ Running";
const DB_NOT_AVAILABLE: &str = "❌ Not Available";
const DB_AVAILABLE: &str = "✅ Available";
const DB_WORKING: &str = "✅ Connected & Working";
const CONNECTED: &str = "Connected";
const NOT_CONNECTED: &str = "Not Connected";
const ENV_SET: &str = "✅ Set";
const ENV_NOT_SET: &str = "❌ Not Set";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Whether the store's connection settings were present at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvPresence {
    pub database_url: bool,
    pub database_name: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionProbeError {
    #[error("no store connection configured")]
    NotConfigured,
}

pub fn probe_connection(
    store: Option<&dyn DocumentStore>,
) -> Result<&dyn DocumentStore, ConnectionProbeError> {
    store.ok_or(ConnectionProbeError::NotConfigured)
}

pub async fn probe_collections(store: &dyn DocumentStore) -> Result<Vec<String>, AppError> {
    store.list_collection_names().await
}

fn env_flag(present: bool) -> String {
    let flag = if present { ENV_SET } else { ENV_NOT_SET };
    flag.to_string()
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

impl HealthStatus {
    /// Folds probe outcomes into the report. `enumeration` is only consulted
    /// when the connection probe succeeded.
    pub fn assemble(
        connection: Result<(), ConnectionProbeError>,
        enumeration: Option<Result<Vec<String>, AppError>>,
        env: EnvPresence,
    ) -> Self {
        let mut status = HealthStatus {
            backend: BACKEND_RUNNING.to_string(),
            database: DB_NOT_AVAILABLE.to_string(),
            database_url: env_flag(env.database_url),
            database_name: env_flag(env.database_name),
            connection_status: NOT_CONNECTED.to_string(),
            collections: Vec::new(),
        };

        if connection.is_err() {
            return status;
        }

        status.database = DB_AVAILABLE.to_string();
        status.connection_status = CONNECTED.to_string();

        match enumeration {
            Some(Ok(mut names)) => {
                names.truncate(MAX_REPORTED_COLLECTIONS);
                status.collections = names;
                status.database = DB_WORKING.to_string();
            }
            Some(Err(err)) => {
                let message = err.to_string();
                status.database = format!(
                    "⚠️  Connected but Error: {}",
                    truncate_chars(&message, MAX_ERROR_CHARS)
                );
            }
            None => {}
        }

        status
    }
}

/// Runs every probe against the injected store handle.
pub async fn check(store: Option<&dyn DocumentStore>, env: EnvPresence) -> HealthStatus {
    match probe_connection(store) {
        Ok(store) => {
            let enumeration = probe_collections(store).await;
            if let Err(e) = &enumeration {
                tracing::warn!(database = %store.database_name(), "Collection enumeration failed: {}", e);
            }
            HealthStatus::assemble(Ok(()), Some(enumeration), env)
        }
        Err(e) => {
            tracing::debug!("Diagnostics without a store: {}", e);
            HealthStatus::assemble(Err(e), None, env)
        }
    }
}
