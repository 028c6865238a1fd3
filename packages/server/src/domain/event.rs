//! Event Router の入出力イベント
//!
//! トランスポートに依存しない表現。JSON との相互変換は
//! `infrastructure::dto` が担う。

use super::{
    entity::{ChatMessage, Participant},
    value_object::{ConnectionId, DisplayName, MessageText},
};

/// クライアントから届くイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    Join { display_name: DisplayName },
    Send { text: MessageText },
    Typing { is_typing: bool },
    PrivateSend { to: ConnectionId, text: MessageText },
    /// 接続の切断（トランスポートが発行する暗黙のイベント）
    Disconnect,
}

impl InboundEvent {
    /// ログ出力用のイベント名
    pub fn name(&self) -> &'static str {
        match self {
            Self::Join { .. } => "join",
            Self::Send { .. } => "send",
            Self::Typing { .. } => "typing",
            Self::PrivateSend { .. } => "private-send",
            Self::Disconnect => "disconnect",
        }
    }
}

/// クライアントへ送るイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundEvent {
    /// 新しい接続に自身の接続 ID を知らせる
    Connected { connection_id: ConnectionId },
    ParticipantList(Vec<Participant>),
    ParticipantJoined(Participant),
    ParticipantLeft(Participant),
    MessageReceived(ChatMessage),
    TypingList(Vec<DisplayName>),
    PrivateMessage(ChatMessage),
}

/// 配送先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Audience {
    /// 配送時点で開いている全ての接続
    All,
    /// 明示した接続の集合（重複なし）
    Connections(Vec<ConnectionId>),
}

/// 配送先付きの出力イベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub audience: Audience,
    pub event: OutboundEvent,
}

impl Delivery {
    pub fn to_all(event: OutboundEvent) -> Self {
        Self {
            audience: Audience::All,
            event,
        }
    }

    /// 指定した接続へ配送する。重複した接続 ID は 1 つにまとめる。
    pub fn to_connections(mut connections: Vec<ConnectionId>, event: OutboundEvent) -> Self {
        let mut seen = Vec::with_capacity(connections.len());
        connections.retain(|id| {
            if seen.contains(id) {
                false
            } else {
                seen.push(id.clone());
                true
            }
        });
        Self {
            audience: Audience::Connections(connections),
            event,
        }
    }
}
