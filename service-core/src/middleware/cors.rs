//! Cross-origin policy shared by the HTTP services.
//!
//! Browsers on any origin may call the API with any method and header.
//! Credentials are not allowed: tower-http rejects a wildcard origin combined
//! with `allow_credentials(true)`.

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Apply the permissive CORS policy to the given router.
pub fn apply<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(permissive_cors())
}
