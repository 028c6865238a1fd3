//! HTTP API response DTOs.
//!
//! `/api/messages` and `/api/participants` reuse [`MessageDto`] and
//! [`ParticipantDto`] so HTTP and WebSocket clients see the same shapes.

use serde::{Deserialize, Serialize};

pub use super::websocket::{MessageDto, ParticipantDto};

/// `/health` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    /// RFC 3339 (UTC)
    pub timestamp: String,
    /// Number of joined participants
    pub participants: usize,
    /// Number of open WebSocket connections (joined or not)
    pub connections: usize,
}
