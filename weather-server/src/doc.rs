//! OpenAPI documentation, generated from the handler annotations.

use utoipa::OpenApi;
use utoipa::openapi::server::Server;
use weather_core::WeatherRecord;

use crate::error::{ErrorBody, UpstreamErrorBody};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Weather records API",
        version = "1.0.0",
        description = "Fetches current weather from OpenWeather, stores it in a database and lets clients list the stored records."
    ),
    paths(
        crate::api::create_weather_record,
        crate::api::list_weather_records,
    ),
    components(schemas(WeatherRecord, ErrorBody, UpstreamErrorBody)),
    tags(
        (name = "Weather", description = "Fetching and listing weather records")
    )
)]
pub struct ApiDoc;

/// The document served at `/api-docs`, advertising the local server URL.
pub fn api_doc(port: u16) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(format!("http://localhost:{port}"))]);
    doc
}
