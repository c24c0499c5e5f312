//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Prefix shared by every meeting room name.
const ROOM_NAME_PREFIX: &str = "meeting-";

/// Caller identity value object.
///
/// Opaque string taken from the `Authorization` header. Only its presence
/// is checked here; nothing verifies it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallerId(String);

impl CallerId {
    /// Create a new CallerId.
    ///
    /// # Arguments
    ///
    /// * `id` - The raw header value
    ///
    /// # Returns
    ///
    /// A Result containing the CallerId or an error if validation fails
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::CallerIdEmpty);
        }
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Meeting identifier value object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeetingId(String);

impl MeetingId {
    /// Create a new MeetingId.
    ///
    /// # Arguments
    ///
    /// * `id` - The meeting identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the MeetingId or an error if validation fails
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::MeetingIdEmpty);
        }
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Provider-side unique name of a meeting room.
///
/// Always derived from a [`MeetingId`], never parsed from input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomName(String);

impl RoomName {
    /// Derive the room name for a meeting: `"meeting-" + meeting_id`.
    pub fn for_meeting(meeting_id: &MeetingId) -> Self {
        Self(format!("{ROOM_NAME_PREFIX}{}", meeting_id.as_str()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque room handle assigned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomSid(String);

impl RoomSid {
    /// Create a new RoomSid.
    pub fn new(sid: String) -> Result<Self, ValueObjectError> {
        if sid.is_empty() {
            return Err(ValueObjectError::RoomSidEmpty);
        }
        Ok(Self(sid))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomSid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
