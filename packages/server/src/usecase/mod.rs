//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層の VideoProvider を操作します。

pub mod check_room_status;

pub use check_room_status::CheckRoomStatusUseCase;
