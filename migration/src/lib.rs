pub use sea_orm_migration::prelude::*;

mod m20240406_000001_create_users;
mod m20240406_000002_create_data_items;
mod m20240406_000003_initial_seeder;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240406_000001_create_users::Migration),
            Box::new(m20240406_000002_create_data_items::Migration),
            Box::new(m20240406_000003_initial_seeder::Migration),
        ]
    }
}
