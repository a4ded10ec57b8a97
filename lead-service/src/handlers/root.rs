use axum::Json;
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "yapp360-new";

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Backend running",
        "service": SERVICE_NAME
    }))
}

pub async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello from the backend API!" }))
}
