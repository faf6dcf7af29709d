use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{controllers, requests, responses};

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Auth"),
        (name = "Data"),
        (name = "Health"),
    ),
    modifiers(&Security),
    paths(
        controllers::v1::auth::login,
        controllers::v1::data::index,
        controllers::v1::data::store,
        controllers::health::health,
    ),
    components(schemas(
        requests::v1::auth::LoginRequest,
        requests::v1::data::DataStoreRequest,

        responses::v1::auth::Authenticated,
        responses::v1::data::DataItem,
        responses::v1::data::DataCollection,
        responses::v1::data::DataCreated,

        controllers::health::HealthResponse,
    )),
)]
pub struct Definition;

/// Registers the bearer scheme referenced by the protected paths.
struct Security;

impl Modify for Security {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
