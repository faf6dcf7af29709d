use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload for creating a data item.
///
/// Absent fields deserialize as empty strings; validation rejects both the
/// missing and the empty case with the same 400.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
pub struct DataStoreRequest {
    #[serde(default)]
    #[schema(example = "My note")]
    pub title: String,
    #[serde(default)]
    #[schema(example = "Something worth keeping")]
    pub content: String,
}
