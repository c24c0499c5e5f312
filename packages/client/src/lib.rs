//! Waiting-room client for the room status server.
//!
//! Polls the room status endpoint until someone (normally the host) is in
//! the meeting's video room.

pub mod error;
pub mod status_client;
pub mod waiting_room;

pub use error::ClientError;
pub use status_client::{RoomStatusClient, RoomStatusView};
pub use waiting_room::{WaitOutcome, WaitingRoom};
