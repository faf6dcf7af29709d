use actix_web::Responder;
use actix_web::web::{Data, Json};
use sea_orm::DatabaseConnection;

use crate::errors::HttpError;
use crate::requests::v1::auth::LoginRequest;
use crate::responses::v1::auth::Authenticated;
use crate::security::{PasswordHasher, TokenIssuer};
use crate::services;

/// Create a new session
///
/// Fail if:
/// - username or password is missing
/// - credentials do not match
#[utoipa::path(
    tag = "Auth",
    responses(
        (status = 200, description = "Authenticated", body = Authenticated),
        (status = 400, description = "Missing username or password"),
        (status = 401, description = "Invalid credentials"),
    )
)]
#[post("/auth/login")]
pub async fn login(
    db: Data<DatabaseConnection>,
    hasher: Data<PasswordHasher>,
    issuer: Data<TokenIssuer>,
    Json(request): Json<LoginRequest>,
) -> Result<impl Responder, HttpError> {
    let response = services::v1::auth::login::login(&db, &hasher, &issuer, request).await?;

    Ok(Json(response))
}
