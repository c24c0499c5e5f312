//! HTTP API request and response DTOs for the room status endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::RoomStatus;

/// Request body for the room status endpoint
///
/// `meetingId` is kept as raw JSON so a value of the wrong type is rejected
/// as a missing meeting id rather than as an unreadable body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRoomStatusRequestDto {
    #[serde(default)]
    pub meeting_id: Option<Value>,
}

impl CheckRoomStatusRequestDto {
    pub fn new(meeting_id: impl Into<String>) -> Self {
        Self {
            meeting_id: Some(Value::String(meeting_id.into())),
        }
    }

    /// Meeting id as text: non-empty strings as-is, non-zero numbers in
    /// decimal. Null, empty, zero, booleans, arrays and objects give `None`.
    pub fn meeting_id_text(&self) -> Option<String> {
        match self.meeting_id.as_ref()? {
            Value::String(id) if !id.is_empty() => Some(id.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Room status payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStatusResponseDto {
    pub has_participants: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_count: Option<usize>,
    pub room_exists: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RoomStatusResponseDto {
    /// Catch-all payload for failures no inner handler classified.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self {
            has_participants: false,
            participant_count: None,
            room_exists: false,
            error: Some(message.into()),
        }
    }
}

impl From<&RoomStatus> for RoomStatusResponseDto {
    fn from(status: &RoomStatus) -> Self {
        Self {
            has_participants: status.has_participants(),
            participant_count: status.participant_count(),
            room_exists: status.room_exists(),
            error: status.error().map(str::to_string),
        }
    }
}

/// Error body for rejected requests (401 / 400)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
}
