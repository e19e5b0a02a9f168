use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::cache::LookupError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("embedding provider error: {0}")]
    ProviderError(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("lookup timed out: {0}")]
    Timeout(String),
}

impl From<LookupError> for GatewayError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::InvalidArgument { reason } => GatewayError::InvalidRequest(reason),
            LookupError::Provider(e) => GatewayError::ProviderError(e.to_string()),
            LookupError::Store(e) => GatewayError::StoreUnavailable(e.to_string()),
            LookupError::Timeout { .. } => GatewayError::Timeout(err.to_string()),
        }
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::ProviderError(_) => StatusCode::BAD_GATEWAY,
            GatewayError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, body).into_response()
    }
}
