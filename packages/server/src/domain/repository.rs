//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{
    ChatMessage, ConnectionId, Delivery, InboundEvent, Participant, RepositoryError, Timestamp,
};

/// Session Repository trait
///
/// チャットセッション（Registry / Message Log / Typing Tracker）への
/// インターフェース。UseCase 層はこの trait に依存し、Infrastructure 層の
/// 具体的な実装には依存しない。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// 入力イベントをセッションに適用し、配送すべきイベントを返す
    async fn apply(
        &self,
        connection_id: &ConnectionId,
        event: InboundEvent,
        now: Timestamp,
    ) -> Result<Vec<Delivery>, RepositoryError>;

    /// メッセージ履歴（古い順）を取得
    async fn get_messages(&self) -> Vec<ChatMessage>;

    /// 参加者リストを取得
    async fn get_participants(&self) -> Vec<Participant>;

    /// 参加者数を取得
    async fn count_participants(&self) -> usize;
}
