use std::future::{Ready, ready};

use actix_web::FromRequest;
use actix_web::dev::Payload;
use actix_web::web::Data;
use actix_web::HttpRequest;

use crate::errors::HttpError;
use crate::security::TokenIssuer;

/// The authenticated subject of a request.
///
/// Extracting `Auth` performs the whole capability check: a handler that
/// takes an `Auth` argument never runs without a verified bearer token, and
/// the rejection is a 401 issued before the handler body.
#[derive(Clone, Copy, Debug)]
pub struct Auth {
    pub user_id: i32,
}

impl FromRequest for Auth {
    type Error = HttpError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

/// Check a request for a valid bearer token, returning the subject or a
/// rejection. Independent of the routing mechanism; `FromRequest` above is
/// only the glue.
fn authenticate(req: &HttpRequest) -> Result<Auth, HttpError> {
    let issuer = req.app_data::<Data<TokenIssuer>>().ok_or_else(|| {
        tracing::error!("token issuer not registered in app data");

        HttpError::Internal(anyhow::anyhow!("token issuer not configured"))
    })?;

    let header = req
        .headers()
        .get("Authorization")
        .ok_or_else(|| HttpError::unauthorized("Missing authorization header"))?;

    let header = header
        .to_str()
        .map_err(|_| HttpError::unauthorized("Invalid authorization header"))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| HttpError::unauthorized("Invalid authorization header"))?;

    let subject = issuer.verify(token)?;

    // The subject travels as a string; parse it back to the domain id.
    let user_id = subject
        .parse::<i32>()
        .map_err(|_| HttpError::unauthorized("Invalid or expired token"))?;

    Ok(Auth { user_id })
}
