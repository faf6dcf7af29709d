use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(palisade_migration::Migrator).await;
}
