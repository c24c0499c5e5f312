//! Wire format of the Twilio Video REST API (v1).
//!
//! Only the fields this service reads are modelled; everything else in the
//! provider's documents is ignored.

use serde::{Deserialize, Serialize};

/// Room status filter value for rooms that are currently active.
pub const ROOM_STATUS_IN_PROGRESS: &str = "in-progress";

/// Paging metadata attached to every list response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMetaDto {
    #[serde(default)]
    pub next_page_url: Option<String>,
}

/// One page of `GET /v1/Rooms`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomPageDto {
    pub rooms: Vec<RoomDto>,
    #[serde(default)]
    pub meta: PageMetaDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDto {
    pub sid: String,
}

/// One page of `GET /v1/Rooms/{RoomSid}/Participants`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantPageDto {
    pub participants: Vec<ParticipantDto>,
    #[serde(default)]
    pub meta: PageMetaDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantDto {
    pub sid: String,
    #[serde(default)]
    pub identity: Option<String>,
}

/// Error document returned with non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwilioErrorDto {
    #[serde(default)]
    pub code: Option<u32>,
    pub message: String,
    #[serde(default)]
    pub status: Option<u16>,
}

/// A list page that may point to a following page.
pub trait Page {
    type Item;

    fn into_parts(self) -> (Vec<Self::Item>, Option<String>);
}

impl Page for RoomPageDto {
    type Item = RoomDto;

    fn into_parts(self) -> (Vec<RoomDto>, Option<String>) {
        (self.rooms, self.meta.next_page_url)
    }
}

impl Page for ParticipantPageDto {
    type Item = ParticipantDto;

    fn into_parts(self) -> (Vec<ParticipantDto>, Option<String>) {
        (self.participants, self.meta.next_page_url)
    }
}
