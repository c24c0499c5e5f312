//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, header::AUTHORIZATION},
};

use crate::{
    domain::{CallerId, MeetingId},
    infrastructure::dto::http::{CheckRoomStatusRequestDto, RoomStatusResponseDto},
    ui::{error::ApiError, state::AppState},
    usecase::CheckRoomStatusUseCase,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Report whether the meeting's video room has participants.
///
/// Provider failures still answer 200 so a polling client keeps polling.
/// Only a missing caller (401), a missing meeting id (400) or an
/// unparseable body (500) end the request early.
pub async fn check_room_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<RoomStatusResponseDto>, ApiError> {
    // 1. 呼び出し元 ID（存在チェックのみ）
    let caller_id = headers
        .get(AUTHORIZATION)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .and_then(|value| CallerId::new(value).ok())
        .ok_or(ApiError::Unauthorized)?;

    // 2. リクエストボディ
    let request: CheckRoomStatusRequestDto =
        serde_json::from_slice(&body).map_err(|e| ApiError::Unexpected(e.to_string()))?;

    // 3. ミーティング ID
    let meeting_id = request
        .meeting_id_text()
        .and_then(|id| MeetingId::new(id).ok())
        .ok_or(ApiError::MeetingIdRequired)?;

    let usecase = CheckRoomStatusUseCase::new(state.provider.clone());
    let status = usecase.execute(&caller_id, &meeting_id).await;

    Ok(Json(RoomStatusResponseDto::from(&status)))
}
