use sea_orm::DatabaseConnection;

use crate::testing::setup;

/// Bearer token for the seeded `testuser` (user id 1), signed with the same
/// test secret the `service!` app verifies with.
pub fn seeded_token() -> String {
    setup::token_issuer()
        .issue("1")
        .expect("Failed to issue test token")
}

/// Bearer token for an arbitrary user id.
pub fn token_for(user_id: i32) -> String {
    setup::token_issuer()
        .issue(&user_id.to_string())
        .expect("Failed to issue test token")
}

/// Fresh migrated in-memory database; kept for parity with `service!`,
/// which needs the connection alongside the service.
pub async fn database() -> DatabaseConnection {
    setup::database().await
}

/// Build an in-process service with a fresh in-memory database and the test
/// hasher, issuer, and router wired exactly as in `main`.
///
/// Expands to `(service, db)`.
#[macro_export]
macro_rules! service {
    () => {{
        let db = $crate::testing::instance::database().await;
        let app = ::actix_web::App::new()
            .app_data(::actix_web::web::Data::new(db.clone()))
            .app_data(::actix_web::web::Data::new(
                $crate::testing::setup::password_hasher().unwrap(),
            ))
            .app_data(::actix_web::web::Data::new(
                $crate::testing::setup::token_issuer(),
            ))
            .configure($crate::router::route);

        let service = ::actix_web::test::init_service(app).await;

        (service, db)
    }};
}
