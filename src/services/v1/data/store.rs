use sea_orm::DatabaseConnection;

use crate::entities::v1::data_items::Model;
use crate::errors::HttpError;
use crate::middlewares::v1::auth::Auth;
use crate::requests::v1::data::DataStoreRequest;
use crate::responses::v1::data::DataCreated;
use crate::security::escape;

pub async fn store(
    db: &DatabaseConnection,
    auth: Auth,
    request: DataStoreRequest,
) -> Result<DataCreated, HttpError> {
    if request.title.is_empty() || request.content.is_empty() {
        return Err(HttpError::validation("Title and content are required"));
    }

    // Escaped again on every read; the encoder is idempotent, so the stored
    // form and the served form stay identical.
    let title = escape(&request.title);
    let content = escape(&request.content);

    let item = Model::create(db, title, content, auth.user_id).await?;

    Ok(item.into())
}
