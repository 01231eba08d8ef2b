use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "customer-registry",
        "version": env!("CARGO_PKG_VERSION"),
        "data_access": state.data_access.to_string()
    }))
}
