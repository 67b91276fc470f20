use axum::{Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health", root_path), get(health))
        .route(&format!("{}/health/ready", root_path), get(readiness))
}

pub async fn health() -> Response<HealthResponse> {
    Response::OK(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn readiness(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    state
        .service
        .member_repository
        .db
        .ping()
        .await
        .map_err(|e| {
            tracing::error!("Database ping failed: {}", e);
            ApiError::InternalServerError("database unavailable".to_string())
        })?;

    Ok(Response::OK(HealthResponse {
        status: "ready".to_string(),
    }))
}
