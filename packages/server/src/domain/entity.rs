//! Domain entities for the room status service.

use super::value_object::RoomSid;

/// Message reported when a room lookup fails for a reason the provider
/// did not classify.
pub const ROOM_CHECK_FAILED: &str = "Room check failed";

/// An in-progress room as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRoom {
    pub sid: RoomSid,
}

/// A participant connected to a room. Only the count is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderParticipant {
    pub sid: String,
    pub identity: Option<String>,
}

/// Normalized outcome of a room status check.
///
/// Each variant fixes which response fields are meaningful, so
/// `has_participants() == room_exists() && participant_count > 0`
/// holds for every value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomStatus {
    /// No in-progress room carries the meeting's room name.
    NotFound,

    /// The room lookup itself failed.
    CheckFailed { reason: String },

    /// The room exists but its participant list could not be fetched.
    ParticipantsUnavailable,

    /// The room exists and its participants were counted.
    Active { participant_count: usize },
}

impl RoomStatus {
    /// Build the status for a room whose participants were listed.
    pub fn with_participants(participants: &[ProviderParticipant]) -> Self {
        Self::Active {
            participant_count: participants.len(),
        }
    }

    pub fn room_exists(&self) -> bool {
        matches!(self, Self::ParticipantsUnavailable | Self::Active { .. })
    }

    pub fn has_participants(&self) -> bool {
        matches!(self, Self::Active { participant_count } if *participant_count > 0)
    }

    /// Participant count, or `None` when the response omits it.
    pub fn participant_count(&self) -> Option<usize> {
        match self {
            Self::NotFound | Self::ParticipantsUnavailable => Some(0),
            Self::Active { participant_count } => Some(*participant_count),
            Self::CheckFailed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::CheckFailed { reason } => Some(reason.as_str()),
            _ => None,
        }
    }
}
