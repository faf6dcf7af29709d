#![deny(warnings)]

use actix_web::web::Data;
use actix_web::{App, HttpServer};
use palisade_migration::{Migrator, MigratorTrait};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use palisade::security::{PasswordHasher, TokenIssuer};
use palisade::{config, database, router};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = config::load()?;

    let db = database::connect(&config.database).await?;

    // Schema and seed data are applied before the first bind.
    Migrator::up(&db, None).await?;

    let hasher = PasswordHasher::from_config(&config.auth)
        .map_err(|e| anyhow::anyhow!("invalid argon2 configuration: {e}"))?;
    let issuer = TokenIssuer::from_config(&config.auth);

    let db = Data::new(db);
    let hasher = Data::new(hasher);
    let issuer = Data::new(issuer);

    tracing::info!(
        name = %config.app.name,
        environment = %config.app.environment,
        host = %config.server.host,
        port = config.server.port,
        "starting server"
    );

    let address = (config.server.host.clone(), config.server.port);

    HttpServer::new(move || {
        App::new()
            .app_data(db.clone())
            .app_data(hasher.clone())
            .app_data(issuer.clone())
            .configure(router::route)
    })
    .bind(address)?
    .run()
    .await?;

    Ok(())
}
