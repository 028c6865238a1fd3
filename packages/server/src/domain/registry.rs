//! Connection Registry
//!
//! 接続 ID → 参加者 のマップ。「誰がオンラインか」の唯一の情報源。

use std::collections::HashMap;

use super::{entity::Participant, value_object::ConnectionId};

#[derive(Debug, Clone, Default)]
pub struct ConnectionRegistry {
    participants: HashMap<ConnectionId, Participant>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 参加者を登録する（同じ接続 ID なら上書き）
    ///
    /// 上書きした場合は以前の参加者を返す。
    pub fn join(&mut self, participant: Participant) -> Option<Participant> {
        self.participants
            .insert(participant.connection_id.clone(), participant)
    }

    /// 参加者を削除する
    ///
    /// 未登録の接続 ID は何もしない（`None` を返す）。
    pub fn leave(&mut self, connection_id: &ConnectionId) -> Option<Participant> {
        self.participants.remove(connection_id)
    }

    pub fn get(&self, connection_id: &ConnectionId) -> Option<&Participant> {
        self.participants.get(connection_id)
    }

    pub fn contains(&self, connection_id: &ConnectionId) -> bool {
        self.participants.contains_key(connection_id)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// 現在の参加者リスト
    ///
    /// 順序に意味はないが、出力を安定させるため接続 ID 順に並べる。
    pub fn snapshot(&self) -> Vec<Participant> {
        let mut participants: Vec<Participant> = self.participants.values().cloned().collect();
        participants.sort_by(|a, b| a.connection_id.cmp(&b.connection_id));
        participants
    }
}
