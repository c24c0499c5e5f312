//! Domain layer for the room status service.
//!
//! This module contains the room status model and the provider port.
//! It is independent of data transfer objects (DTOs) and of the concrete
//! video provider.

pub mod entity;
pub mod error;
pub mod provider;
pub mod value_object;

pub use entity::{ProviderParticipant, ProviderRoom, RoomStatus};
pub use error::{ProviderError, ValueObjectError};
pub use provider::VideoProvider;
pub use value_object::{CallerId, MeetingId, RoomName, RoomSid};
