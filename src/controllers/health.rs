//! Health check endpoint

use actix_web::Responder;
use actix_web::web::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    #[schema(example = "healthy")]
    pub status: String,
}

/// Liveness check endpoint
///
/// Always returns 200 OK while the process is running; no authentication
/// and no I/O beyond the response itself.
#[utoipa::path(
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse),
    )
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    tracing::debug!("Liveness check: healthy");

    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
