//! HTTP error payloads and mapping from core failures.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use weather_core::{ConfigError, FetchError, RecordError, StoreError};

const INTERNAL_MESSAGE: &str = "Internal server error.";

/// Body for errors raised by this service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Internal server error.")]
    pub error: String,
}

/// Body for errors forwarded from the weather provider.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpstreamErrorBody {
    #[schema(example = "city not found")]
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Configuration(#[from] ConfigError),

    /// Provider status and message, forwarded unchanged.
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    /// Details stay in the logs.
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn missing_api_key() -> Self {
        Self::Configuration(ConfigError::MissingApiKey)
    }
}

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Upstream { status, message } => ApiError::Upstream {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            },
            other => {
                error!(error = ?other, "weather provider call failed");
                ApiError::Internal
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        error!(error = ?err, "storage operation failed");
        ApiError::Internal
    }
}

impl From<RecordError> for ApiError {
    fn from(err: RecordError) -> Self {
        error!(error = %err, "provider returned unusable values");
        ApiError::Internal
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Configuration(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream { status, .. } => *status,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            ApiError::Upstream { message, .. } => builder.json(UpstreamErrorBody {
                message: message.clone(),
            }),
            ApiError::Configuration(err) => builder.json(ErrorBody {
                error: err.to_string(),
            }),
            ApiError::Internal => builder.json(ErrorBody {
                error: INTERNAL_MESSAGE.to_string(),
            }),
        }
    }
}
