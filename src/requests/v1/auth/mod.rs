use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login credentials.
///
/// Absent fields deserialize as empty strings; validation rejects both the
/// missing and the empty case with the same 400.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(example = "testuser")]
    pub username: String,
    #[serde(default)]
    #[schema(example = "password")]
    pub password: String,
}
