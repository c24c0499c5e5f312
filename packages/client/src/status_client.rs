//! Single room status check against the server.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use roomwatch_server::infrastructure::dto::http::CheckRoomStatusRequestDto;
use serde::Deserialize;

use crate::error::ClientError;

const ENDPOINT_PATH: &str = "/video/check-room-status";

/// Room status as seen by a polling client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomStatusView {
    pub has_participants: bool,
    pub participant_count: usize,
    pub room_exists: bool,
    pub error: Option<String>,
}

impl RoomStatusView {
    fn failed(error: impl Into<String>) -> Self {
        Self {
            has_participants: false,
            participant_count: 0,
            room_exists: false,
            error: Some(error.into()),
        }
    }
}

/// Response body with every field optional; missing fields get defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStatus {
    has_participants: Option<bool>,
    participant_count: Option<usize>,
    room_exists: Option<bool>,
    error: Option<String>,
}

impl From<RawStatus> for RoomStatusView {
    fn from(raw: RawStatus) -> Self {
        Self {
            has_participants: raw.has_participants.unwrap_or(false),
            participant_count: raw.participant_count.unwrap_or(0),
            // Absent means the server did not say the room is gone.
            room_exists: raw.room_exists.unwrap_or(true),
            error: raw.error,
        }
    }
}

/// HTTP client for the room status endpoint.
pub struct RoomStatusClient {
    http: reqwest::Client,
    endpoint: String,
    identity: String,
}

impl RoomStatusClient {
    pub fn new(
        server_url: &str,
        identity: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let server_url = server_url.trim_end_matches('/');
        if server_url.is_empty() {
            return Err(ClientError::EmptyServerUrl);
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: format!("{server_url}{ENDPOINT_PATH}"),
            identity: identity.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Check the meeting's room once.
    ///
    /// Never fails: transport problems and non-2xx answers come back as a
    /// view with `error` set and no participants.
    pub async fn check(&self, meeting_id: &str) -> RoomStatusView {
        let body = CheckRoomStatusRequestDto::new(meeting_id);

        let response = match self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, &self.identity)
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Error checking room status: {}", e);
                return RoomStatusView::failed(e.to_string());
            }
        };

        let status = response.status();
        let raw = match response.json::<RawStatus>().await {
            Ok(raw) => raw,
            Err(e) if status.is_success() => {
                tracing::error!("Error checking room status: {}", e);
                return RoomStatusView::failed(e.to_string());
            }
            Err(_) => RawStatus::default(),
        };

        if !status.is_success() {
            tracing::warn!("Room status check returned non-200 status: {}", status);
            return RoomStatusView::failed(raw.error.unwrap_or_else(|| "Server error".to_string()));
        }

        if let Some(error) = &raw.error {
            tracing::warn!("Room status check returned error: {}", error);
        }

        raw.into()
    }
}
