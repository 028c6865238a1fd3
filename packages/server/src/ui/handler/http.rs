//! HTTP API endpoint handlers (read-only snapshots).

use std::sync::Arc;

use axum::{Json, extract::State};
use hiroba_shared::time::timestamp_to_rfc3339;

use crate::{
    infrastructure::dto::http::{HealthDto, MessageDto, ParticipantDto},
    ui::state::AppState,
};

/// Get the broadcast message history, oldest first
pub async fn get_messages(State(state): State<Arc<AppState>>) -> Json<Vec<MessageDto>> {
    let messages = state.get_messages_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(messages.iter().map(MessageDto::from).collect())
}

/// Get the participants currently online
pub async fn get_participants(State(state): State<Arc<AppState>>) -> Json<Vec<ParticipantDto>> {
    let participants = state.get_participants_usecase.execute().await;

    Json(participants.iter().map(ParticipantDto::from).collect())
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthDto> {
    let status = state.health_check_usecase.execute().await;

    Json(HealthDto {
        status: "ok".to_string(),
        timestamp: timestamp_to_rfc3339(status.checked_at.value()),
        participants: status.participants,
        connections: status.connections,
    })
}
