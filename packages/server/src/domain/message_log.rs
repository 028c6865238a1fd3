//! Message Log
//!
//! 全員宛てメッセージの上限付き履歴。上限を超えたら古いものから捨てる。
//! メッセージ ID の払い出しもここが担う。

use std::collections::VecDeque;

use super::{entity::ChatMessage, value_object::MessageId};

/// デフォルトの保持件数
pub const DEFAULT_MESSAGE_LOG_CAPACITY: usize = 100;

#[derive(Debug, Clone)]
pub struct MessageLog {
    messages: VecDeque<ChatMessage>,
    capacity: usize,
    last_id: u64,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MESSAGE_LOG_CAPACITY)
    }

    /// 保持件数を指定して作成（0 は 1 に切り上げる）
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            // Grows on demand past the default size
            messages: VecDeque::with_capacity(capacity.min(DEFAULT_MESSAGE_LOG_CAPACITY)),
            capacity,
            last_id: 0,
        }
    }

    /// 次のメッセージ ID を払い出す（1 始まり、単調増加）
    pub fn next_id(&mut self) -> MessageId {
        self.last_id += 1;
        MessageId::new(self.last_id)
    }

    /// メッセージを末尾に追加し、上限を超えた分を先頭から捨てる
    pub fn append(&mut self, message: ChatMessage) {
        debug_assert!(!message.is_private(), "private messages are never logged");
        self.messages.push_back(message);
        while self.messages.len() > self.capacity {
            self.messages.pop_front();
        }
    }

    /// 古い順の履歴
    pub fn snapshot(&self) -> Vec<ChatMessage> {
        self.messages.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}
