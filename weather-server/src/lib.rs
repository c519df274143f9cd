//! HTTP service that fetches current weather from OpenWeather, appends it to
//! the `weather_data` table and lists the stored records.

pub mod api;
pub mod app;
pub mod bootstrap;
pub mod doc;
pub mod error;
pub mod state;

pub use app::build_app;
pub use bootstrap::bootstrap;
pub use doc::{ApiDoc, api_doc};
pub use error::ApiError;
pub use state::AppState;
