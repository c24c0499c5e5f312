//! Infrastructure layer.
//!
//! DTOs for the HTTP surface and the provider wire format, plus the concrete
//! VideoProvider implementation.

pub mod dto;
pub mod provider;
