//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::RepositoryError;

/// イベントのルーティングに失敗した理由
///
/// いずれもそのイベント 1 件だけを破棄すればよく、接続は維持される。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteEventError {
    #[error("{0}")]
    Rejected(#[from] RepositoryError),

    /// 更新・配送タスクが panic した
    #[error("routing task failed: {0}")]
    TaskFailed(String),
}
