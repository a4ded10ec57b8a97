use crate::services::EnvPresence;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const DATABASE_NAME_VAR: &str = "DATABASE_NAME";

#[derive(Debug, Clone, Deserialize)]
pub struct LeadConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
}

/// Store connection settings. Both are optional: without them the service
/// runs with no store handle and reports that on `/test`.
#[derive(Clone, Default, Deserialize)]
pub struct MongoConfig {
    pub uri: Option<String>,
    pub database: Option<String>,
}

// The URI may carry credentials.
impl std::fmt::Debug for MongoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoConfig")
            .field("uri", &self.uri.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .finish()
    }
}

impl MongoConfig {
    /// Both settings, when both are present and non-empty.
    pub fn connection_target(&self) -> Option<(&str, &str)> {
        match (self.uri.as_deref(), self.database.as_deref()) {
            (Some(uri), Some(db)) if !uri.is_empty() && !db.is_empty() => Some((uri, db)),
            _ => None,
        }
    }

    pub fn presence(&self) -> EnvPresence {
        EnvPresence {
            database_url: self.uri.is_some(),
            database_name: self.database.is_some(),
        }
    }
}

impl LeadConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env, APP__ prefix and PORT)
        let common = core_config::Config::load()?;

        Ok(LeadConfig {
            common,
            mongodb: MongoConfig {
                uri: non_empty_env(DATABASE_URL_VAR),
                database: non_empty_env(DATABASE_NAME_VAR),
            },
        })
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
