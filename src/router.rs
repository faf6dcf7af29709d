use actix_web::web::{self, ServiceConfig};
use utoipa::OpenApi;
use utoipa_swagger_ui::{SwaggerUi, Url};

use crate::api::Definition;
use crate::controllers;

pub fn route(app: &mut ServiceConfig) {
    // Auth
    app.service(controllers::v1::auth::login);
    // Data
    app.service(controllers::v1::data::index);
    app.service(controllers::v1::data::store);

    // Health check endpoint
    app.service(controllers::health::health);

    // must at the end!
    app.service(web::redirect("/docs", "/docs/"));
    app.service(SwaggerUi::new("/docs/{_:.*}").urls(vec![(
        Url::new("Palisade", "/api.json"),
        Definition::openapi(),
    )]));
}
