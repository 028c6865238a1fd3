//! InMemory Session Repository 実装
//!
//! ドメイン層が定義する SessionRepository trait の具体的な実装。
//! `ChatSession` ドメインモデルをそのままストレージとして使用します。
//! 状態はプロセスの再起動で失われます。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ChatMessage, ChatSession, ConnectionId, Delivery, InboundEvent, Participant,
    RepositoryError, SessionRepository, Timestamp,
};

/// インメモリ Session Repository 実装
pub struct InMemorySessionRepository {
    /// ChatSession ドメインモデル
    session: Arc<Mutex<ChatSession>>,
}

impl InMemorySessionRepository {
    /// 新しい InMemorySessionRepository を作成
    pub fn new(session: Arc<Mutex<ChatSession>>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn apply(
        &self,
        connection_id: &ConnectionId,
        event: InboundEvent,
        now: Timestamp,
    ) -> Result<Vec<Delivery>, RepositoryError> {
        let mut session = self.session.lock().await;
        Ok(session.apply(connection_id, event, now)?)
    }

    async fn get_messages(&self) -> Vec<ChatMessage> {
        let session = self.session.lock().await;
        session.message_log().snapshot()
    }

    async fn get_participants(&self) -> Vec<Participant> {
        let session = self.session.lock().await;
        session.registry().snapshot()
    }

    async fn count_participants(&self) -> usize {
        let session = self.session.lock().await;
        session.registry().len()
    }
}
