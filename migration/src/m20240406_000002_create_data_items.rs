use sea_orm_migration::prelude::*;

use crate::m20240406_000001_create_users::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = Table::create()
            .table(DataItem::Table)
            .col(
                ColumnDef::new(DataItem::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(DataItem::Title).string().not_null())
            .col(ColumnDef::new(DataItem::Content).string().not_null())
            .col(ColumnDef::new(DataItem::UserId).integer().not_null())
            .foreign_key(
                ForeignKey::create()
                    .name("fk_data_items_user_id")
                    .from(DataItem::Table, DataItem::UserId)
                    .to(User::Table, User::Id),
            )
            .take();

        manager.create_table(table).await?;

        manager
            .create_index(
                Index::create()
                    .table(DataItem::Table)
                    .col(DataItem::UserId)
                    .name("idx_data_items_user_id")
                    .take(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DataItem::Table).take())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DataItem {
    #[sea_orm(iden = "data_items")]
    Table,
    Id,
    Title,
    Content,
    UserId,
}
