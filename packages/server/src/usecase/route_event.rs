//! UseCase: イベントのルーティング（Event Router の実行部）
//!
//! 接続のライフサイクル（接続・入力イベント・切断）を受け取り、
//! `SessionRepository` に状態更新を委ね、返ってきた配送指示を
//! `MessagePusher` で実行します。
//!
//! ## 順序保証
//!
//! 状態の更新と配送は `gate` の中でまとめて行います。これにより
//! 全ての接続が reducer の適用順どおりにイベントを受け取り、
//! 後から接続したクライアントがそれ以前のイベントを受け取ることもありません。
//! 配送はキューへの非同期送信のみで、`gate` を保持したまま I/O を待つことはありません。
//!
//! ## キャンセル耐性
//!
//! 更新と配送は `tokio::spawn` したタスクで実行し、呼び出し側はその完了を待つだけです。
//! 呼び出し側の future が途中で破棄されても（受信タスクの abort など）、
//! 一度適用した更新の配送は最後まで行われます。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - connect / execute / disconnect の各メソッド
//! - 配送先（全員 / 送信者と受信者のみ）の振り分け
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加・送信・入力中・プライベート送信・切断
//! - 異常系：上限を超えたペイロード
//! - エッジケース：join していない接続の切断、二重切断、配送途中での呼び出し側のキャンセル

use std::sync::Arc;

use hiroba_shared::time::Clock;
use tokio::sync::Mutex;

use crate::domain::{
    Audience, ConnectionId, ConnectionIdFactory, Delivery, InboundEvent, MessagePusher,
    OutboundEvent, PusherChannel, SessionRepository, Timestamp,
};

use super::error::RouteEventError;

/// イベントルーティングのユースケース
pub struct RouteEventUseCase {
    dispatcher: Arc<Dispatcher>,
}

/// 更新と配送を実際に行う部分（spawn したタスクと共有する）
struct Dispatcher {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn SessionRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// メッセージの送信時刻に使う時計
    clock: Arc<dyn Clock>,
    /// 状態更新と配送を直列化するゲート
    gate: Mutex<()>,
}

impl RouteEventUseCase {
    /// 新しい RouteEventUseCase を作成
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            dispatcher: Arc::new(Dispatcher {
                repository,
                message_pusher,
                clock,
                gate: Mutex::new(()),
            }),
        }
    }

    /// 新しい接続を登録する
    ///
    /// 接続 ID を払い出し、送信キューを登録して、本人にだけ
    /// `connected` イベントを送る。この時点ではまだ匿名の接続。
    ///
    /// # Arguments
    ///
    /// * `sender` - クライアントへのメッセージ送信用チャンネル
    ///
    /// # Returns
    ///
    /// 払い出した接続 ID
    pub async fn connect(&self, sender: PusherChannel) -> ConnectionId {
        let connection_id = ConnectionIdFactory::generate();

        let dispatcher = self.dispatcher.clone();
        let task_connection_id = connection_id.clone();
        let task =
            tokio::spawn(async move { dispatcher.connect(task_connection_id, sender).await });
        if let Err(e) = task.await {
            tracing::error!("Connect task of '{}' failed: {}", connection_id, e);
        }

        connection_id
    }

    /// クライアントからのイベントを処理する
    ///
    /// # Arguments
    ///
    /// * `connection_id` - イベントを送った接続
    /// * `event` - 入力イベント（Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Delivery>)` - 実行した配送指示（空なら何も起きていない）
    /// * `Err(RouteEventError)` - イベントが拒否された。状態は変更されていない
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        event: InboundEvent,
    ) -> Result<Vec<Delivery>, RouteEventError> {
        let dispatcher = self.dispatcher.clone();
        let task_connection_id = connection_id.clone();
        tokio::spawn(async move { dispatcher.route(&task_connection_id, event).await })
            .await
            .map_err(|e| RouteEventError::TaskFailed(e.to_string()))?
    }

    /// 接続の切断を処理する（何度呼んでも安全）
    pub async fn disconnect(&self, connection_id: &ConnectionId) -> Vec<Delivery> {
        match self.execute(connection_id, InboundEvent::Disconnect).await {
            Ok(deliveries) => deliveries,
            Err(e) => {
                tracing::warn!("Failed to process disconnect of '{}': {}", connection_id, e);
                Vec::new()
            }
        }
    }
}

impl Dispatcher {
    async fn connect(&self, connection_id: ConnectionId, sender: PusherChannel) {
        let _gate = self.gate.lock().await;
        self.message_pusher
            .register_client(connection_id.clone(), sender)
            .await;

        let connected = OutboundEvent::Connected {
            connection_id: connection_id.clone(),
        };
        if let Err(e) = self.message_pusher.push_to(&connection_id, &connected).await {
            tracing::warn!("Failed to send connected event to '{}': {}", connection_id, e);
        }
    }

    async fn route(
        &self,
        connection_id: &ConnectionId,
        event: InboundEvent,
    ) -> Result<Vec<Delivery>, RouteEventError> {
        let event_name = event.name();
        let is_disconnect = matches!(event, InboundEvent::Disconnect);

        let _gate = self.gate.lock().await;

        // 切断した接続自身には何も送らない
        if is_disconnect {
            self.message_pusher.unregister_client(connection_id).await;
        }

        let now = Timestamp::new(self.clock.now_millis());
        let deliveries = self.repository.apply(connection_id, event, now).await?;
        tracing::debug!(
            "Applied '{}' from '{}' ({} deliveries)",
            event_name,
            connection_id,
            deliveries.len()
        );

        self.deliver(&deliveries).await;

        Ok(deliveries)
    }

    async fn deliver(&self, deliveries: &[Delivery]) {
        for delivery in deliveries {
            let result = match &delivery.audience {
                Audience::All => self.message_pusher.broadcast_all(&delivery.event).await,
                Audience::Connections(targets) => {
                    self.message_pusher
                        .broadcast(targets.clone(), &delivery.event)
                        .await
                }
            };
            if let Err(e) = result {
                tracing::warn!("Failed to deliver event: {}", e);
            }
        }
    }
}
