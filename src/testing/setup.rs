use palisade_migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};

use crate::config::auth::{Argon2Config, AuthConfig};
use crate::database;
use crate::entities::v1::{data_items, users};
use crate::security::password::PasswordHasher;
use crate::security::token::TokenIssuer;

/// Returns an in-memory SQLite database with all migrations applied
///
/// Every call creates a fresh database, so tests stay isolated. The seed
/// migration runs too: the database starts with `testuser` (password
/// `testpass123`) owning two items.
///
/// # Panics
/// Panics if the connection or a migration fails; tests should fail fast
/// when setup is broken.
pub async fn database() -> DatabaseConnection {
    let db = database::memory()
        .await
        .expect("Failed to connect to in-memory database");

    palisade_migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Auth configuration with reduced Argon2 parameters for tests
///
/// Production parameters (64 MB, 3 iterations) make each hash take hundreds
/// of milliseconds; these keep the same logic roughly 50x faster.
pub fn auth_config() -> AuthConfig {
    AuthConfig {
        token_lifetime: 3600,
        secret: "test-signing-secret".to_string(),
        argon2: Argon2Config {
            memory_cost: 19456, // 19 MB (reduced from 64 MB)
            time_cost: 1,       // 1 iteration (reduced from 3)
            parallelism: 1,     // 1 thread (reduced from 4)
            hash_length: 32,    // 32 bytes (same as production)
            salt_length: 16,    // 16 bytes (same as production)
        },
    }
}

/// PasswordHasher configured with the fast test parameters
pub fn password_hasher() -> Result<PasswordHasher, argon2::password_hash::Error> {
    PasswordHasher::from_config(&auth_config())
}

/// TokenIssuer signing with the test secret
pub fn token_issuer() -> TokenIssuer {
    TokenIssuer::from_config(&auth_config())
}

/// Helper to create a test user with a random unique username
///
/// The password is always "password".
pub async fn create_test_user(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
) -> Result<users::Model, DbErr> {
    use rand::Rng;

    let random_suffix: u32 = rand::thread_rng().r#gen();
    let username = format!("test_user_{}", random_suffix);

    let password_hash = hasher.hash("password").expect("Failed to hash password");

    let user = users::ActiveModel {
        username: Set(username),
        password_hash: Set(password_hash),
        ..Default::default()
    };

    user.insert(db).await
}

/// Insert a data item owned by `user_id`, bypassing the HTTP layer.
pub async fn create_data_item(
    db: &DatabaseConnection,
    user_id: i32,
    title: &str,
    content: &str,
) -> Result<data_items::Model, DbErr> {
    data_items::Model::create(db, title, content, user_id).await
}
