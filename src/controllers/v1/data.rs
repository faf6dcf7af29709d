use actix_web::Responder;
use actix_web::web::{Data, Json};
use sea_orm::DatabaseConnection;

use crate::errors::HttpError;
use crate::middlewares::v1::auth::Auth;
use crate::requests::v1::data::DataStoreRequest;
use crate::responses::v1::data::{DataCollection, DataCreated};
use crate::services;

/// List the caller's data items
///
/// Fail if:
/// - token is missing, invalid, or expired
#[utoipa::path(
    tag = "Data",
    security(("token" = [])),
    responses(
        (status = 200, description = "Items owned by the authenticated user", body = DataCollection),
        (status = 401, description = "Missing, invalid, or expired token"),
    )
)]
#[get("/api/data")]
pub async fn index(auth: Auth, db: Data<DatabaseConnection>) -> Result<impl Responder, HttpError> {
    let response = services::v1::data::list::list(&db, auth).await?;

    Ok(Json(response))
}

/// Store a new data item owned by the caller
///
/// Fail if:
/// - token is missing, invalid, or expired
/// - title or content is missing
#[utoipa::path(
    tag = "Data",
    security(("token" = [])),
    responses(
        (status = 201, description = "Item created", body = DataCreated),
        (status = 400, description = "Missing title or content"),
        (status = 401, description = "Missing, invalid, or expired token"),
    )
)]
#[post("/api/data")]
pub async fn store(
    auth: Auth,
    db: Data<DatabaseConnection>,
    Json(request): Json<DataStoreRequest>,
) -> Result<impl Responder, HttpError> {
    let response = services::v1::data::store::store(&db, auth, request).await?;

    Ok(response)
}
