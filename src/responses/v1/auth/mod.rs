use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Successful login payload.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct Authenticated {
    pub access_token: String,
    #[schema(example = "Bearer")]
    pub token_type: String,
    pub user_id: i32,
    pub username: String,
}
