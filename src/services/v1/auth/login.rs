use sea_orm::DatabaseConnection;

use crate::entities::v1::users::Model;
use crate::errors::HttpError;
use crate::requests::v1::auth::LoginRequest;
use crate::responses::v1::auth::Authenticated;
use crate::security::{PasswordHasher, TokenIssuer};

pub async fn login(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    issuer: &TokenIssuer,
    request: LoginRequest,
) -> Result<Authenticated, HttpError> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err(HttpError::validation("Username and password are required"));
    }

    // Unknown username and wrong password produce the same rejection so the
    // response never reveals which usernames exist.
    let Some(user) = Model::find_by_username(db, &request.username).await? else {
        return Err(HttpError::unauthorized("Invalid credentials"));
    };

    let verified = hasher
        .verify(&request.password, &user.password_hash)
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "stored password hash failed to parse");

            false
        });

    if !verified {
        return Err(HttpError::unauthorized("Invalid credentials"));
    }

    let token = issuer.issue(&user.id.to_string())?;

    Ok(Authenticated {
        access_token: token,
        token_type: "Bearer".to_string(),
        user_id: user.id,
        username: user.username,
    })
}
