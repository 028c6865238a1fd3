//! Typing-State Tracker
//!
//! 入力中の接続 ID → 表示名。接続 ID ごとに高々 1 エントリ。

use std::collections::HashMap;

use super::value_object::{ConnectionId, DisplayName};

#[derive(Debug, Clone, Default)]
pub struct TypingTracker {
    entries: HashMap<ConnectionId, DisplayName>,
}

impl TypingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 入力開始
    pub fn start(&mut self, connection_id: ConnectionId, display_name: DisplayName) {
        self.entries.insert(connection_id, display_name);
    }

    /// 入力終了。エントリがあればその表示名を返す。
    pub fn stop(&mut self, connection_id: &ConnectionId) -> Option<DisplayName> {
        self.entries.remove(connection_id)
    }

    /// 入力中であれば表示名を差し替える。差し替えたら `true`。
    pub fn rename(&mut self, connection_id: &ConnectionId, display_name: DisplayName) -> bool {
        match self.entries.get_mut(connection_id) {
            Some(current) => {
                *current = display_name;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, connection_id: &ConnectionId) -> bool {
        self.entries.contains_key(connection_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 入力中の表示名一覧（接続 ID 順）
    pub fn display_names(&self) -> Vec<DisplayName> {
        let mut entries: Vec<(&ConnectionId, &DisplayName)> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter().map(|(_, name)| name.clone()).collect()
    }
}
