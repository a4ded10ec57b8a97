//! Application startup and lifecycle management.

use crate::config::LeadConfig;
use crate::handlers;
use crate::services::{DocumentStore, EnvPresence, MongoDb};
use axum::{body::Body, middleware::from_fn, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::{
    cors,
    metrics::metrics_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Option<Arc<dyn DocumentStore>>,
    pub env: EnvPresence,
}

impl AppState {
    pub fn new(store: Option<Arc<dyn DocumentStore>>, env: EnvPresence) -> Self {
        Self { store, env }
    }

    pub fn store(&self) -> Option<&dyn DocumentStore> {
        self.store.as_deref()
    }

    /// The store handle, or the error data endpoints report without one.
    pub fn require_store(&self) -> Result<&dyn DocumentStore, AppError> {
        self.store().ok_or_else(|| {
            AppError::InternalError(anyhow::anyhow!(
                "Database not available. Check DATABASE_URL and DATABASE_NAME environment variables."
            ))
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(handlers::root))
        .route("/api/hello", get(handlers::hello))
        .route(
            "/api/leads",
            get(handlers::list_leads).post(handlers::create_lead),
        )
        .route("/schema", get(handlers::get_schema))
        .route("/test", get(handlers::test_database))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .fallback(handlers::not_found)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(from_fn(request_id_middleware));

    cors::apply(router).with_state(state)
}

/// Connects to MongoDB when both connection settings are present.
///
/// An unparsable URI is a startup error. Missing settings are not: the service
/// then runs without a store.
pub async fn connect_store(config: &LeadConfig) -> Result<Option<Arc<dyn DocumentStore>>, AppError> {
    match config.mongodb.connection_target() {
        Some((uri, database)) => {
            let store: Arc<dyn DocumentStore> = Arc::new(MongoDb::connect(uri, database).await?);
            Ok(Some(store))
        }
        None => {
            tracing::warn!(
                "DATABASE_URL and DATABASE_NAME not both set; running without a document store"
            );
            Ok(None)
        }
    }
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    pub async fn build(config: LeadConfig) -> Result<Self, AppError> {
        let store = connect_store(&config).await?;
        Self::build_with_store(config, store).await
    }

    /// Builds the application around an already constructed store handle.
    pub async fn build_with_store(
        config: LeadConfig,
        store: Option<Arc<dyn DocumentStore>>,
    ) -> Result<Self, AppError> {
        let state = AppState::new(store, config.mongodb.presence());

        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.run_with_shutdown(std::future::pending()).await
    }

    pub async fn run_with_shutdown<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = build_router(self.state);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await
    }
}
