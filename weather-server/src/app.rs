//! The actix `App` served by `weather-server`: routes, middleware and docs.

use actix_cors::Cors;
use actix_web::{
    App, Error,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware, web,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{api, state::AppState};

/// Any origin may call the API, as the browser frontend is served elsewhere.
fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
}

/// Build the application with the weather routes, permissive CORS, request
/// logging and Swagger UI at `/api-docs`.
pub fn build_app(
    state: web::Data<AppState>,
    openapi: utoipa::openapi::OpenApi,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(middleware::Logger::default())
        .wrap(cors())
        .configure(api::routes)
        .service(web::redirect("/api-docs", "/api-docs/"))
        .service(SwaggerUi::new("/api-docs/{_:.*}").url("/api-docs/openapi.json", openapi))
}
