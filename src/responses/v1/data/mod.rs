use actix_web::body::BoxBody;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::v1::data_items;
use crate::security::escape;

/// A single data item with its user-supplied fields entity-escaped.
///
/// Escaping happens in the conversion from the stored model, so every
/// egress path serializes the escaped form regardless of what reached the
/// store.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct DataItem {
    pub id: i32,
    pub title: String,
    pub content: String,
}

impl From<data_items::Model> for DataItem {
    fn from(model: data_items::Model) -> Self {
        Self {
            id: model.id,
            title: escape(&model.title),
            content: escape(&model.content),
        }
    }
}

/// The caller's items plus a count.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct DataCollection {
    pub data: Vec<DataItem>,
    pub count: usize,
}

impl From<Vec<data_items::Model>> for DataCollection {
    fn from(models: Vec<data_items::Model>) -> Self {
        let data: Vec<DataItem> = models.into_iter().map(DataItem::from).collect();
        let count = data.len();

        Self { data, count }
    }
}

/// A freshly created item, echoed back with its generated id.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct DataCreated {
    pub id: i32,
    pub title: String,
    pub content: String,
    #[schema(example = "Data item created successfully")]
    pub message: String,
}

impl From<data_items::Model> for DataCreated {
    fn from(model: data_items::Model) -> Self {
        Self {
            id: model.id,
            title: escape(&model.title),
            content: escape(&model.content),
            message: "Data item created successfully".to_string(),
        }
    }
}

impl Responder for DataCreated {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Created().json(self)
    }
}
