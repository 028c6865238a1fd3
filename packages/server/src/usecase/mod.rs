//! UseCase 層
//!
//! Domain 層の Repository / MessagePusher を組み合わせてアプリケーションの
//! 操作を実装します。

mod error;
mod get_messages;
mod get_participants;
mod health_check;
mod route_event;

pub use error::RouteEventError;
pub use get_messages::GetMessagesUseCase;
pub use get_participants::GetParticipantsUseCase;
pub use health_check::{HealthCheckUseCase, HealthStatus};
pub use route_event::RouteEventUseCase;
