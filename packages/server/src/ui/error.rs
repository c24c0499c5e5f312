//! Request-level errors and their JSON responses.

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::infrastructure::dto::http::{ErrorResponseDto, RoomStatusResponseDto};

/// Errors that end a request before or outside the room check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// `Authorization` header missing or empty
    #[error("Unauthorized")]
    Unauthorized,

    /// `meetingId` missing or empty
    #[error("Meeting ID is required")]
    MeetingIdRequired,

    /// Anything no inner handler classified
    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::MeetingIdRequired => StatusCode::BAD_REQUEST,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::Unexpected(message) => {
                tracing::error!("Error in room status endpoint: {}", message);
                (status, Json(RoomStatusResponseDto::unexpected(message))).into_response()
            }
            rejected => {
                tracing::debug!("Rejected room status request: {}", rejected);
                let body = ErrorResponseDto {
                    error: rejected.to_string(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

/// Turn a handler panic into the catch-all 500 payload.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Unknown panic".to_string()
    };

    ApiError::Unexpected(message).into_response()
}
