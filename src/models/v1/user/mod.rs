use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};

use crate::entities::v1::users::{ActiveModel, Column, Entity, Model};

impl Model {
    /// Look a user up by exact username.
    ///
    /// The username travels as a bound parameter; its content never reaches
    /// the SQL text.
    pub async fn find_by_username<T: ToString>(
        db: &DatabaseConnection,
        username: T,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::Username.eq(username.to_string()))
            .one(db)
            .await
    }

    /// Insert a user unless the username is already taken.
    ///
    /// Backed by the unique constraint on `username`; a conflicting insert
    /// is a no-op, so the call is idempotent.
    pub async fn insert_if_absent<U, P>(
        db: &DatabaseConnection,
        username: U,
        password_hash: P,
    ) -> Result<(), DbErr>
    where
        U: ToString,
        P: ToString,
    {
        let user = ActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(password_hash.to_string()),
            ..Default::default()
        };

        match Entity::insert(user)
            .on_conflict(OnConflict::column(Column::Username).do_nothing().to_owned())
            .exec(db)
            .await
        {
            Ok(_) | Err(DbErr::RecordNotInserted) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
