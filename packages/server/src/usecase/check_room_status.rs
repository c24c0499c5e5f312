//! UseCase: ルーム状態確認処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CheckRoomStatusUseCase::execute() メソッド
//! - ルーム検索 → 参加者一覧取得 → RoomStatus への変換
//!
//! ### なぜこのテストが必要か
//! - プロバイダのエラーが全て RoomStatus に吸収されることを保証
//! - ポーリング中のクライアントが一時的な障害で待機を打ち切らないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：ルームあり（参加者 0 人 / N 人）、ルームなし
//! - 異常系：ルーム検索の Api エラー / Transport エラー、参加者一覧の取得失敗
//! - エッジケース：同名ルームが複数返された場合（先頭を採用）

use std::sync::Arc;

use crate::domain::{
    CallerId, MeetingId, RoomName, RoomStatus, VideoProvider, entity::ROOM_CHECK_FAILED,
};

/// ルーム状態確認のユースケース
pub struct CheckRoomStatusUseCase {
    /// VideoProvider（外部サービスの抽象化）
    provider: Arc<dyn VideoProvider>,
}

impl CheckRoomStatusUseCase {
    /// 新しい CheckRoomStatusUseCase を作成
    pub fn new(provider: Arc<dyn VideoProvider>) -> Self {
        Self { provider }
    }

    /// ルーム状態確認を実行
    ///
    /// プロバイダ呼び出しの失敗はここで RoomStatus に変換され、呼び出し元へは伝播しない。
    ///
    /// # Arguments
    ///
    /// * `caller_id` - 呼び出し元の ID（ログ出力のみに使用）
    /// * `meeting_id` - 確認するミーティングの ID
    ///
    /// # Returns
    ///
    /// 正規化されたルーム状態
    pub async fn execute(&self, caller_id: &CallerId, meeting_id: &MeetingId) -> RoomStatus {
        let room_name = RoomName::for_meeting(meeting_id);
        tracing::debug!("Caller '{}' checking room {}", caller_id, room_name);

        // 1. 進行中のルームを検索
        let rooms = match self.provider.find_in_progress_rooms(&room_name).await {
            Ok(rooms) => rooms,
            Err(e) if e.is_api_error() => {
                tracing::warn!("Provider API error when checking room {}: {}", room_name, e);
                return RoomStatus::CheckFailed {
                    reason: e.to_string(),
                };
            }
            Err(e) => {
                tracing::warn!("General error checking room {}: {}", room_name, e);
                return RoomStatus::CheckFailed {
                    reason: ROOM_CHECK_FAILED.to_string(),
                };
            }
        };

        // 2. 先頭のルームを採用
        let Some(room) = rooms.into_iter().next() else {
            tracing::info!("Room {} not found or not active", room_name);
            return RoomStatus::NotFound;
        };

        // 3. 参加者一覧を取得
        match self.provider.list_participants(&room.sid).await {
            Ok(participants) => {
                tracing::debug!(
                    "Room {} ({}) has {} participant(s)",
                    room_name,
                    room.sid,
                    participants.len()
                );
                RoomStatus::with_participants(&participants)
            }
            Err(e) => {
                tracing::warn!("Error fetching participants for room {}: {}", room.sid, e);
                RoomStatus::ParticipantsUnavailable
            }
        }
    }
}
