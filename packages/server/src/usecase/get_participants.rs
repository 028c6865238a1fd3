//! UseCase: 参加者リストの取得

use std::sync::Arc;

use crate::domain::{Participant, SessionRepository};

/// 参加者リスト取得のユースケース
pub struct GetParticipantsUseCase {
    repository: Arc<dyn SessionRepository>,
}

impl GetParticipantsUseCase {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// 現在の参加者リストを取得
    pub async fn execute(&self) -> Vec<Participant> {
        self.repository.get_participants().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConnectionId, DisplayName, MockSessionRepository};

    #[tokio::test]
    async fn test_execute_returns_participants() {
        // テスト項目: Repository の参加者リストがそのまま返される
        // given (前提条件):
        let mut repository = MockSessionRepository::new();
        repository.expect_get_participants().times(1).returning(|| {
            vec![Participant::new(
                ConnectionId::new("c1".to_string()).unwrap(),
                DisplayName::new("alice".to_string()),
            )]
        });
        let usecase = GetParticipantsUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].display_name.as_str(), "alice");
    }
}
