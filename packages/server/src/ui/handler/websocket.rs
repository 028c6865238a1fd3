//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, InboundEvent, ValueObjectError},
    infrastructure::dto::websocket::ClientEvent,
    ui::state::AppState,
};

/// Reasons an inbound text frame is dropped before reaching the router
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("malformed JSON event: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid event payload: {0}")]
    Invalid(#[from] ValueObjectError),
}

/// Parse one text frame into a domain event.
pub fn parse_client_event(text: &str) -> Result<InboundEvent, FrameError> {
    let event: ClientEvent = serde_json::from_str(text)?;
    Ok(InboundEvent::try_from(event)?)
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// This function handles the outbound message flow: events routed to this
/// connection (via rx channel) are written to its WebSocket.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    // Register before reading anything so the connection only sees events from now on
    let (tx, rx) = mpsc::unbounded_channel();
    let connection_id = state.route_event_usecase.connect(tx).await;
    tracing::info!("Client '{}' connected", connection_id);

    let mut send_task = pusher_loop(rx, sender);

    let recv_state = state.clone();
    let recv_connection_id = connection_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", recv_connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_text(&recv_state, &recv_connection_id, text.as_str()).await;
                }
                Message::Binary(_) => {
                    tracing::debug!("Ignoring binary frame from '{}'", recv_connection_id);
                }
                Message::Ping(_) => {
                    // Ping/pong is handled automatically by the WebSocket protocol
                    tracing::debug!("Received ping");
                }
                Message::Close(_) => {
                    tracing::info!("Client '{}' requested close", recv_connection_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other.
    // An event already handed to the usecase is still delivered after the abort.
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    let deliveries = state.route_event_usecase.disconnect(&connection_id).await;
    tracing::info!(
        "Client '{}' disconnected ({} notification(s) sent)",
        connection_id,
        deliveries.len()
    );
}

/// Route one text frame. Bad frames are logged and dropped; the connection stays open.
async fn handle_text(state: &AppState, connection_id: &ConnectionId, text: &str) {
    tracing::debug!("Received text from '{}': {}", connection_id, text);

    let event = match parse_client_event(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Dropping frame from '{}': {}", connection_id, e);
            return;
        }
    };

    let event_name = event.name();
    if let Err(e) = state.route_event_usecase.execute(connection_id, event).await {
        tracing::warn!("Dropping '{}' event from '{}': {}", event_name, connection_id, e);
    }
}
