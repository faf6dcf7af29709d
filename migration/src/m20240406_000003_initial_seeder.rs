use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHasher as Argon2Hasher, SaltString},
};
use rand::rngs::OsRng;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::sea_query::OnConflict;

use crate::m20240406_000001_create_users::User;
use crate::m20240406_000002_create_data_items::DataItem;

#[derive(DeriveMigrationName)]
pub struct Migration;

const SEED_USER_ID: i32 = 1;
const SEED_USERNAME: &str = "testuser";
const SEED_PASSWORD: &str = "testpass123";

const SEED_ITEMS: [(&str, &str); 2] = [
    ("Test Item 1", "This is a test content"),
    ("Test Item 2", "Another test content"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let params = Params::new(
            65536, // 64 MB memory cost
            3,     // 3 iterations
            4,     // 4 threads parallelism
            Some(32),
        )
        .expect("Invalid Argon2 parameters");

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = argon2
            .hash_password(SEED_PASSWORD.as_bytes(), &salt)
            .expect("Failed to hash seed password")
            .to_string();

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(User::Table)
                    .columns(vec![User::Id, User::Username, User::PasswordHash])
                    .values_panic(vec![
                        SEED_USER_ID.into(),
                        SEED_USERNAME.into(),
                        password_hash.into(),
                    ])
                    .on_conflict(OnConflict::column(User::Username).do_nothing().to_owned())
                    .to_owned(),
            )
            .await?;

        let mut items = Query::insert()
            .into_table(DataItem::Table)
            .columns(vec![DataItem::Title, DataItem::Content, DataItem::UserId])
            .to_owned();

        for (title, content) in SEED_ITEMS {
            items = items
                .values_panic(vec![title.into(), content.into(), SEED_USER_ID.into()])
                .to_owned();
        }

        manager.exec_stmt(items).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(DataItem::Table)
                    .and_where(Expr::col(DataItem::UserId).eq(SEED_USER_ID))
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(User::Table)
                    .and_where(Expr::col(User::Username).eq(SEED_USERNAME))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
