use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::v1::data_items::{ActiveModel, Column, Entity, Model};

impl Model {
    /// Items owned by a single user, oldest first.
    ///
    /// Scoping by `user_id` happens here, in the query itself; no caller
    /// can read across owners.
    pub async fn find_by_owner(db: &DatabaseConnection, user_id: i32) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    /// Insert a new item owned by `user_id`, returning it with its
    /// generated id.
    pub async fn create<T, C>(
        db: &DatabaseConnection,
        title: T,
        content: C,
        user_id: i32,
    ) -> Result<Self, DbErr>
    where
        T: ToString,
        C: ToString,
    {
        let item = ActiveModel {
            title: Set(title.to_string()),
            content: Set(content.to_string()),
            user_id: Set(user_id),
            ..Default::default()
        };

        item.insert(db).await
    }
}
