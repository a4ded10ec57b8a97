#![allow(dead_code)]

use lead_service::config::{LeadConfig, MongoConfig};
use lead_service::services::{DocumentStore, InMemoryStore};
use lead_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Option<Arc<InMemoryStore>>,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawns the service backed by a fresh in-memory store, with both
    /// database settings reported as present.
    pub async fn spawn() -> Self {
        Self::spawn_with_store(Some(Arc::new(InMemoryStore::new("lead_test"))), true).await
    }

    /// Spawns the service with no store handle and no database settings.
    pub async fn spawn_without_store() -> Self {
        Self::spawn_with_store(None, false).await
    }

    pub async fn spawn_with_store(store: Option<Arc<InMemoryStore>>, env_set: bool) -> Self {
        let mongodb = if env_set {
            MongoConfig {
                uri: Some("mongodb://localhost:27017".to_string()),
                database: Some("lead_test".to_string()),
            }
        } else {
            MongoConfig::default()
        };

        let config = LeadConfig {
            // Random port for testing
            common: CoreConfig {
                port: 0,
                ..CoreConfig::default()
            },
            mongodb,
        };

        let handle = store
            .clone()
            .map(|s| -> Arc<dyn DocumentStore> { s });

        let app = Application::build_with_store(config, handle)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            store,
            client,
        }
    }

    pub async fn post_lead(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/leads", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
