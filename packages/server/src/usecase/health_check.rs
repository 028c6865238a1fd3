//! UseCase: ヘルスチェック

use std::sync::Arc;

use hiroba_shared::time::Clock;

use crate::domain::{MessagePusher, SessionRepository, Timestamp};

/// プロセスの稼働状況
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthStatus {
    pub checked_at: Timestamp,
    /// join 済みの参加者数
    pub participants: usize,
    /// 開いている接続数（匿名の接続を含む）
    pub connections: usize,
}

/// ヘルスチェックのユースケース
pub struct HealthCheckUseCase {
    repository: Arc<dyn SessionRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl HealthCheckUseCase {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            clock,
        }
    }

    pub async fn execute(&self) -> HealthStatus {
        HealthStatus {
            checked_at: Timestamp::new(self.clock.now_millis()),
            participants: self.repository.count_participants().await,
            connections: self.message_pusher.count_clients().await,
        }
    }
}
