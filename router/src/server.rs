use crate::{coordinator::Coordinator, error::RouterError, MessageRequest, MessageResponse};

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};

pub const PROCESS_MESSAGE_PATH: &str = "/api/process-message";
pub const HEALTH_PATH: &str = "/health";
pub const VERSION: &str = "1.0.0";

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Builds the inbound API. CORS is wide open; restrict origins in production.
pub fn app(coordinator: Coordinator) -> Router {
    Router::new()
        .route(
            PROCESS_MESSAGE_PATH,
            post(move |request: Json<MessageRequest>| {
                message_handler(request, coordinator.clone())
            }),
        )
        .route(HEALTH_PATH, get(health_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn message_handler(
    request: Json<MessageRequest>,
    coordinator: Coordinator,
) -> Result<Json<MessageResponse>, RouterError> {
    let response = coordinator.process_request(request.0).await?;
    Ok(Json(response))
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: VERSION.to_string(),
    })
}
