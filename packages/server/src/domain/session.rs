//! Event Router
//!
//! チャットセッションの状態（Connection Registry / Message Log /
//! Typing-State Tracker）を所有し、入力イベントごとに状態を更新して
//! 配送先付きの出力イベントを返す純粋な reducer。
//!
//! 接続ごとの状態遷移:
//!
//! ```text
//! Connected(anonymous) --join--> Joined(named) --disconnect--> Disconnected
//!          |                        ^   |
//!          |                        +---+ join (表示名を上書き)
//!          +-------------------disconnect---------------------> Disconnected
//! ```
//!
//! I/O は一切行わないので、トランスポートなしでテストできる。

use super::{
    entity::{ChatMessage, Participant},
    error::SessionError,
    event::{Delivery, InboundEvent, OutboundEvent},
    message_log::{DEFAULT_MESSAGE_LOG_CAPACITY, MessageLog},
    registry::ConnectionRegistry,
    typing::TypingTracker,
    value_object::{ConnectionId, DisplayName, MessageText, Timestamp},
};

pub const DEFAULT_MAX_TEXT_CHARS: usize = 2000;
pub const DEFAULT_MAX_DISPLAY_NAME_CHARS: usize = 64;

/// ペイロードと共有メモリの上限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    /// Message Log の保持件数
    pub history_capacity: usize,
    /// メッセージ本文の最大文字数
    pub max_text_chars: usize,
    /// 表示名の最大文字数
    pub max_display_name_chars: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_MESSAGE_LOG_CAPACITY,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            max_display_name_chars: DEFAULT_MAX_DISPLAY_NAME_CHARS,
        }
    }
}

impl SessionLimits {
    fn check_text(&self, text: &MessageText) -> Result<(), SessionError> {
        let actual = text.char_count();
        if actual > self.max_text_chars {
            return Err(SessionError::TextTooLong {
                actual,
                max: self.max_text_chars,
            });
        }
        Ok(())
    }

    fn check_display_name(&self, display_name: &DisplayName) -> Result<(), SessionError> {
        let actual = display_name.char_count();
        if actual > self.max_display_name_chars {
            return Err(SessionError::DisplayNameTooLong {
                actual,
                max: self.max_display_name_chars,
            });
        }
        Ok(())
    }
}

/// プロセス全体で 1 つのチャットセッション
#[derive(Debug, Clone)]
pub struct ChatSession {
    registry: ConnectionRegistry,
    message_log: MessageLog,
    typing: TypingTracker,
    limits: SessionLimits,
}

impl ChatSession {
    /// 空のストアでセッションを作成
    pub fn new(limits: SessionLimits) -> Self {
        Self {
            registry: ConnectionRegistry::new(),
            message_log: MessageLog::with_capacity(limits.history_capacity),
            typing: TypingTracker::new(),
            limits,
        }
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    pub fn message_log(&self) -> &MessageLog {
        &self.message_log
    }

    pub fn typing(&self) -> &TypingTracker {
        &self.typing
    }

    pub fn limits(&self) -> SessionLimits {
        self.limits
    }

    /// 1 つの入力イベントを適用する
    ///
    /// # Arguments
    ///
    /// * `from` - イベントを送った接続
    /// * `event` - 入力イベント
    /// * `now` - メッセージの送信時刻に使う現在時刻
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Delivery>)` - 配送すべきイベント（配送順）。空なら何も起きていない
    /// * `Err(SessionError)` - 上限を超えたペイロード。状態は変更されない
    pub fn apply(
        &mut self,
        from: &ConnectionId,
        event: InboundEvent,
        now: Timestamp,
    ) -> Result<Vec<Delivery>, SessionError> {
        match event {
            InboundEvent::Join { display_name } => self.join(from, display_name),
            InboundEvent::Send { text } => self.send(from, text, now),
            InboundEvent::Typing { is_typing } => Ok(self.typing_changed(from, is_typing)),
            InboundEvent::PrivateSend { to, text } => self.private_send(from, to, text, now),
            InboundEvent::Disconnect => Ok(self.disconnect(from)),
        }
    }

    fn join(
        &mut self,
        from: &ConnectionId,
        display_name: DisplayName,
    ) -> Result<Vec<Delivery>, SessionError> {
        self.limits.check_display_name(&display_name)?;

        let participant = Participant::new(from.clone(), display_name.clone());
        self.registry.join(participant.clone());

        let mut deliveries = vec![
            Delivery::to_all(OutboundEvent::ParticipantList(self.registry.snapshot())),
            Delivery::to_all(OutboundEvent::ParticipantJoined(participant)),
        ];
        if self.typing.rename(from, display_name) {
            deliveries.push(self.typing_list());
        }
        Ok(deliveries)
    }

    fn send(
        &mut self,
        from: &ConnectionId,
        text: MessageText,
        now: Timestamp,
    ) -> Result<Vec<Delivery>, SessionError> {
        self.limits.check_text(&text)?;

        let message = ChatMessage::broadcast(
            self.message_log.next_id(),
            text,
            self.sender_name(from),
            from.clone(),
            now,
        );
        self.message_log.append(message.clone());

        Ok(vec![Delivery::to_all(OutboundEvent::MessageReceived(message))])
    }

    fn typing_changed(&mut self, from: &ConnectionId, is_typing: bool) -> Vec<Delivery> {
        let Some(participant) = self.registry.get(from) else {
            return Vec::new();
        };

        if is_typing {
            self.typing.start(from.clone(), participant.display_name.clone());
        } else {
            self.typing.stop(from);
        }
        vec![self.typing_list()]
    }

    fn private_send(
        &mut self,
        from: &ConnectionId,
        to: ConnectionId,
        text: MessageText,
        now: Timestamp,
    ) -> Result<Vec<Delivery>, SessionError> {
        self.limits.check_text(&text)?;

        if !self.registry.contains(&to) {
            return Ok(Vec::new());
        }

        let message = ChatMessage::private(
            self.message_log.next_id(),
            text,
            self.sender_name(from),
            from.clone(),
            now,
            to.clone(),
        );

        Ok(vec![Delivery::to_connections(
            vec![to, from.clone()],
            OutboundEvent::PrivateMessage(message),
        )])
    }

    fn disconnect(&mut self, from: &ConnectionId) -> Vec<Delivery> {
        let removed = self.registry.leave(from);
        let was_typing = self.typing.stop(from).is_some();

        // Nothing to refresh for a connection that never joined.
        if removed.is_none() && !was_typing {
            return Vec::new();
        }

        let mut deliveries = Vec::with_capacity(3);
        if let Some(participant) = removed {
            deliveries.push(Delivery::to_all(OutboundEvent::ParticipantLeft(participant)));
        }
        deliveries.push(Delivery::to_all(OutboundEvent::ParticipantList(
            self.registry.snapshot(),
        )));
        deliveries.push(self.typing_list());
        deliveries
    }

    fn sender_name(&self, from: &ConnectionId) -> DisplayName {
        self.registry
            .get(from)
            .map(|p| p.display_name.clone())
            .unwrap_or_else(DisplayName::anonymous)
    }

    fn typing_list(&self) -> Delivery {
        Delivery::to_all(OutboundEvent::TypingList(self.typing.display_names()))
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(SessionLimits::default())
    }
}
