//! Shared application state for the axum handlers.

use std::sync::Arc;

use crate::usecase::{
    GetMessagesUseCase, GetParticipantsUseCase, HealthCheckUseCase, RouteEventUseCase,
};

/// Shared application state
pub struct AppState {
    /// RouteEventUseCase（接続ライフサイクルとイベント配送）
    pub route_event_usecase: Arc<RouteEventUseCase>,
    /// GetMessagesUseCase（メッセージ履歴取得）
    pub get_messages_usecase: Arc<GetMessagesUseCase>,
    /// GetParticipantsUseCase（参加者リスト取得）
    pub get_participants_usecase: Arc<GetParticipantsUseCase>,
    /// HealthCheckUseCase（ヘルスチェック）
    pub health_check_usecase: Arc<HealthCheckUseCase>,
}
