//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// CallerId validation error
    #[error("CallerId cannot be empty")]
    CallerIdEmpty,

    /// MeetingId validation error
    #[error("MeetingId cannot be empty")]
    MeetingIdEmpty,

    /// RoomSid validation error
    #[error("RoomSid cannot be empty")]
    RoomSidEmpty,
}

/// Errors returned by a video provider.
///
/// Callers map each kind onto a response shape instead of inspecting
/// error messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider answered with an error document.
    #[error("HTTP {status} error: {message}")]
    Api {
        status: u16,
        code: Option<u32>,
        message: String,
    },

    /// The request never produced a response (connect failure, timeout).
    #[error("provider request failed: {0}")]
    Transport(String),

    /// The provider answered 2xx but the body could not be decoded.
    #[error("unexpected provider response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Whether the provider itself classified the failure.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}
