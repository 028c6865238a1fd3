//! UseCase: メッセージ履歴の取得

use std::sync::Arc;

use crate::domain::{ChatMessage, SessionRepository};

/// メッセージ履歴取得のユースケース
pub struct GetMessagesUseCase {
    repository: Arc<dyn SessionRepository>,
}

impl GetMessagesUseCase {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// 全員宛てメッセージの履歴（古い順）を取得
    pub async fn execute(&self) -> Vec<ChatMessage> {
        self.repository.get_messages().await
    }
}
