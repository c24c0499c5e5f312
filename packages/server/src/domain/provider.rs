//! Video provider port.
//!
//! The domain layer defines this trait; the infrastructure layer implements
//! it against the real provider, and tests substitute fakes or mocks.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::{ProviderError, ProviderParticipant, ProviderRoom, RoomName, RoomSid};

/// Read-only view of the provider's room and participant directory.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// List in-progress rooms whose unique name equals `name`, in provider order.
    async fn find_in_progress_rooms(
        &self,
        name: &RoomName,
    ) -> Result<Vec<ProviderRoom>, ProviderError>;

    /// List the participants of a room.
    async fn list_participants(
        &self,
        room: &RoomSid,
    ) -> Result<Vec<ProviderParticipant>, ProviderError>;
}
