//! Entity 定義

use super::value_object::{ConnectionId, DisplayName, MessageId, MessageText, Timestamp};

/// 参加者
///
/// `join` を送った接続。接続 ID ごとに高々 1 つ存在する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub connection_id: ConnectionId,
    pub display_name: DisplayName,
}

impl Participant {
    pub fn new(connection_id: ConnectionId, display_name: DisplayName) -> Self {
        Self {
            connection_id,
            display_name,
        }
    }
}

/// チャットメッセージ
///
/// 作成後は不変。`recipient` が `Some` のものはプライベートメッセージで、
/// メッセージログには追加されない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: MessageText,
    pub sender_name: DisplayName,
    pub sender_id: ConnectionId,
    pub sent_at: Timestamp,
    pub recipient: Option<ConnectionId>,
}

impl ChatMessage {
    /// 全員宛てのメッセージを作成
    pub fn broadcast(
        id: MessageId,
        text: MessageText,
        sender_name: DisplayName,
        sender_id: ConnectionId,
        sent_at: Timestamp,
    ) -> Self {
        Self {
            id,
            text,
            sender_name,
            sender_id,
            sent_at,
            recipient: None,
        }
    }

    /// 特定の相手宛てのプライベートメッセージを作成
    pub fn private(
        id: MessageId,
        text: MessageText,
        sender_name: DisplayName,
        sender_id: ConnectionId,
        sent_at: Timestamp,
        recipient: ConnectionId,
    ) -> Self {
        Self {
            id,
            text,
            sender_name,
            sender_id,
            sent_at,
            recipient: Some(recipient),
        }
    }

    pub fn is_private(&self) -> bool {
        self.recipient.is_some()
    }
}
