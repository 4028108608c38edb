use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use remoview_core::error::{RemoviewError, INVALID_GUESSES_MESSAGE, SESSION_FAILED_MESSAGE};
use serde::Serialize;

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            details: self.details,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<RemoviewError> for ApiError {
    fn from(err: RemoviewError) -> Self {
        match &err {
            RemoviewError::InvalidGuesses(e) => {
                Self::unprocessable(INVALID_GUESSES_MESSAGE).with_details(e.to_string())
            }
            RemoviewError::InvalidCoordinates { .. } => {
                Self::unprocessable("Invalid coordinates").with_details(err.to_string())
            }
            RemoviewError::SessionNotFound { .. } => {
                Self::not_found("Session not found").with_details(err.to_string())
            }
            // Remote failures never expose their cause
            _ if err.is_remote() => Self::bad_gateway(SESSION_FAILED_MESSAGE),
            _ => {
                tracing::error!(error = %err, "Request failed");
                Self::internal("Internal error")
            }
        }
    }
}
