//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::usecase::{
    GetMessagesUseCase, GetParticipantsUseCase, HealthCheckUseCase, RouteEventUseCase,
};

use super::{
    handler::{get_messages, get_participants, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Chat relay server
///
/// Holds the use cases and exposes the WebSocket endpoint together with the
/// read-only HTTP API.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     route_event_usecase,
///     get_messages_usecase,
///     get_participants_usecase,
///     health_check_usecase,
/// );
/// server.run("127.0.0.1:5000").await?;
/// ```
pub struct Server {
    /// RouteEventUseCase（接続ライフサイクルとイベント配送）
    route_event_usecase: Arc<RouteEventUseCase>,
    /// GetMessagesUseCase（メッセージ履歴取得）
    get_messages_usecase: Arc<GetMessagesUseCase>,
    /// GetParticipantsUseCase（参加者リスト取得）
    get_participants_usecase: Arc<GetParticipantsUseCase>,
    /// HealthCheckUseCase（ヘルスチェック）
    health_check_usecase: Arc<HealthCheckUseCase>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(
        route_event_usecase: Arc<RouteEventUseCase>,
        get_messages_usecase: Arc<GetMessagesUseCase>,
        get_participants_usecase: Arc<GetParticipantsUseCase>,
        health_check_usecase: Arc<HealthCheckUseCase>,
    ) -> Self {
        Self {
            route_event_usecase,
            get_messages_usecase,
            get_participants_usecase,
            health_check_usecase,
        }
    }

    /// Build the axum router with every endpoint and middleware attached
    pub fn router(&self) -> Router {
        let app_state = Arc::new(AppState {
            route_event_usecase: self.route_event_usecase.clone(),
            get_messages_usecase: self.get_messages_usecase.clone(),
            get_participants_usecase: self.get_participants_usecase.clone(),
            health_check_usecase: self.health_check_usecase.clone(),
        });

        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/messages", get(get_messages))
            .route("/api/participants", get(get_participants))
            .route("/api/users", get(get_participants))
            .route("/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            // Browser clients are served from other origins
            .layer(CorsLayer::permissive())
            .with_state(app_state)
    }

    /// Run the chat relay server
    ///
    /// # Arguments
    ///
    /// * `bind_addr` - The `host:port` address to bind to (e.g., "127.0.0.1:5000")
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, bind_addr: &str) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        // Bind the server to the host and port
        let listener = tokio::net::TcpListener::bind(bind_addr).await?;

        // Start the server
        tracing::info!("Chat relay listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
