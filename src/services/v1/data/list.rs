use sea_orm::DatabaseConnection;

use crate::entities::v1::data_items::Model;
use crate::errors::HttpError;
use crate::middlewares::v1::auth::Auth;
use crate::responses::v1::data::DataCollection;

pub async fn list(db: &DatabaseConnection, auth: Auth) -> Result<DataCollection, HttpError> {
    let items = Model::find_by_owner(db, auth.user_id).await?;

    // The response conversion escapes title and content on the way out.
    Ok(items.into())
}
