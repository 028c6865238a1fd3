//! MessagePusher trait 定義
//!
//! 出力イベントを接続中のクライアントへ届けるためのインターフェース。
//! WebSocket などの具体的な手段は Infrastructure 層が実装します。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, MessagePushError, OutboundEvent};

/// クライアントへの送信チャンネル（シリアライズ済みのフレームを流す）
pub type PusherChannel = mpsc::UnboundedSender<String>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続を登録する。登録後に配送されたイベントだけが届く
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// 接続の登録を解除する（未登録なら何もしない）
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// 特定の接続にイベントを送る
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &OutboundEvent,
    ) -> Result<(), MessagePushError>;

    /// 指定した接続にイベントを送る（一部の送信失敗は許容）
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        event: &OutboundEvent,
    ) -> Result<(), MessagePushError>;

    /// 送信時点で登録されている全ての接続にイベントを送る
    async fn broadcast_all(&self, event: &OutboundEvent) -> Result<(), MessagePushError>;

    /// 登録されている接続数
    async fn count_clients(&self) -> usize;
}
