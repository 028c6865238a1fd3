//! Chat relay server.
//!
//! Relays chat messages, presence and typing indicators between WebSocket
//! clients and serves the read-only HTTP API.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-server
//! cargo run --bin hiroba-server -- --host 0.0.0.0 --port 3000
//! HIROBA_HISTORY_CAPACITY=500 cargo run --bin hiroba-server
//! ```

use std::{collections::HashMap, sync::Arc};

use clap::Parser;
use hiroba_server::{
    config::{Args, ServerConfig},
    domain::ChatSession,
    infrastructure::{
        message_pusher::WebSocketMessagePusher, repository::InMemorySessionRepository,
    },
    ui::Server,
    usecase::{GetMessagesUseCase, GetParticipantsUseCase, HealthCheckUseCase, RouteEventUseCase},
};
use hiroba_shared::{
    logger::setup_logger,
    time::{Clock, SystemClock},
};
use tokio::sync::Mutex;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config = match ServerConfig::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    // Initialize tracing
    setup_logger(
        &[env!("CARGO_PKG_NAME"), env!("CARGO_BIN_NAME"), "tower_http"],
        &config.log_level,
    );
    tracing::debug!("Configuration: {:?}", config);

    // Initialize dependencies in order:
    // 1. Repository
    // 2. MessagePusher
    // 3. UseCases
    // 4. Server

    // 1. Create Repository (in-memory session)
    let session = Arc::new(Mutex::new(ChatSession::new(config.limits)));
    tracing::info!(
        "Chat session created (history capacity: {})",
        config.limits.history_capacity
    );
    let repository = Arc::new(InMemorySessionRepository::new(session));

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher_clients = Arc::new(Mutex::new(HashMap::new()));
    let message_pusher = Arc::new(WebSocketMessagePusher::new(message_pusher_clients));

    // 3. Create UseCases
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let route_event_usecase = Arc::new(RouteEventUseCase::new(
        repository.clone(),
        message_pusher.clone(),
        clock.clone(),
    ));
    let get_messages_usecase = Arc::new(GetMessagesUseCase::new(repository.clone()));
    let get_participants_usecase = Arc::new(GetParticipantsUseCase::new(repository.clone()));
    let health_check_usecase = Arc::new(HealthCheckUseCase::new(
        repository.clone(),
        message_pusher.clone(),
        clock,
    ));

    // 4. Create and run the server
    let server = Server::new(
        route_event_usecase,
        get_messages_usecase,
        get_participants_usecase,
        health_check_usecase,
    );
    if let Err(e) = server.run(&config.bind_addr()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
