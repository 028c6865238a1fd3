//! Helpers shared by the integration tests.
//!
//! Each test starts its own relay on an ephemeral port inside the test
//! runtime and talks to it over real WebSocket / HTTP connections.

#![allow(dead_code)]

use std::{collections::HashMap, net::SocketAddr, sync::Arc, time::Duration};

use futures_util::{SinkExt, StreamExt};
use hiroba_server::{
    domain::{ChatSession, SessionLimits},
    infrastructure::{
        dto::websocket::ServerEvent, message_pusher::WebSocketMessagePusher,
        repository::InMemorySessionRepository,
    },
    ui::Server,
    usecase::{GetMessagesUseCase, GetParticipantsUseCase, HealthCheckUseCase, RouteEventUseCase},
};
use hiroba_shared::time::{Clock, FixedClock};
use tokio::{net::TcpStream, sync::Mutex, task::JoinHandle};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

/// 2023-01-01T00:00:00Z
pub const NOW_MILLIS: i64 = 1_672_531_200_000;

const RECV_TIMEOUT: Duration = Duration::from_secs(2);
const SILENCE_WINDOW: Duration = Duration::from_millis(200);

/// Relay running in the background for one test
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a relay with default limits
    pub async fn start() -> Self {
        Self::start_with_limits(SessionLimits::default()).await
    }

    /// Start a relay with the given limits
    pub async fn start_with_limits(limits: SessionLimits) -> Self {
        let session = Arc::new(Mutex::new(ChatSession::new(limits)));
        let repository = Arc::new(InMemorySessionRepository::new(session));
        let message_pusher = Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
            HashMap::new(),
        ))));
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(NOW_MILLIS));

        let server = Server::new(
            Arc::new(RouteEventUseCase::new(
                repository.clone(),
                message_pusher.clone(),
                clock.clone(),
            )),
            Arc::new(GetMessagesUseCase::new(repository.clone())),
            Arc::new(GetParticipantsUseCase::new(repository.clone())),
            Arc::new(HealthCheckUseCase::new(repository, message_pusher, clock)),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        let app = server.router();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self { addr, handle }
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    pub fn http_url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Open a WebSocket connection and consume its `connected` event
    pub async fn connect(&self) -> TestClient {
        let (ws, _) = connect_async(self.ws_url())
            .await
            .expect("Failed to connect");
        let mut client = TestClient {
            ws,
            connection_id: String::new(),
        };
        match client.recv().await {
            ServerEvent::Connected { connection_id } => client.connection_id = connection_id,
            other => panic!("Expected connected event, got {:?}", other),
        }
        client
    }

    /// Open a connection and join under `display_name`, draining the join broadcasts
    pub async fn join(&self, display_name: &str) -> TestClient {
        let mut client = self.connect().await;
        client
            .send_json(serde_json::json!({ "type": "join", "displayName": display_name }))
            .await;
        assert!(matches!(
            client.recv().await,
            ServerEvent::ParticipantList { .. }
        ));
        assert!(matches!(
            client.recv().await,
            ServerEvent::ParticipantJoined { .. }
        ));
        client
    }

    /// GET `path` and decode the JSON body
    pub async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> T {
        let response = reqwest::get(self.http_url(path))
            .await
            .expect("HTTP request failed");
        assert!(response.status().is_success(), "GET {} failed", path);
        response.json::<T>().await.expect("Invalid JSON body")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// WebSocket client speaking the relay's JSON protocol
pub struct TestClient {
    ws: WebSocketStream<MaybeTlsStream<TcpStream>>,
    pub connection_id: String,
}

impl TestClient {
    pub async fn send_json(&mut self, value: serde_json::Value) {
        self.send_text(&value.to_string()).await;
    }

    pub async fn send_text(&mut self, text: &str) {
        self.ws
            .send(Message::Text(text.to_string().into()))
            .await
            .expect("Failed to send frame");
    }

    /// Next server event, failing the test after a timeout
    pub async fn recv(&mut self) -> ServerEvent {
        loop {
            let frame = tokio::time::timeout(RECV_TIMEOUT, self.ws.next())
                .await
                .expect("Timed out waiting for a server event")
                .expect("Connection closed")
                .expect("WebSocket error");
            match frame {
                Message::Text(text) => {
                    return serde_json::from_str(text.as_str()).expect("Invalid server event");
                }
                Message::Ping(_) | Message::Pong(_) => continue,
                other => panic!("Unexpected frame: {:?}", other),
            }
        }
    }

    /// Assert that nothing arrives for a short while
    pub async fn expect_silence(&mut self) {
        if let Ok(Some(frame)) = tokio::time::timeout(SILENCE_WINDOW, self.ws.next()).await {
            panic!("Expected no event, got {:?}", frame);
        }
    }

    pub async fn close(mut self) {
        let _ = self.ws.close(None).await;
    }
}
