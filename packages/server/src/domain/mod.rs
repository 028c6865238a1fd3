//! Domain 層
//!
//! チャットセッションのモデルと、外側の層に要求するインターフェース
//! （Repository / MessagePusher）を定義します。

pub mod entity;
pub mod error;
pub mod event;
pub mod message_log;
pub mod message_pusher;
pub mod registry;
pub mod repository;
pub mod session;
pub mod typing;
pub mod value_object;

pub use entity::{ChatMessage, Participant};
pub use error::{MessagePushError, RepositoryError, SessionError, ValueObjectError};
pub use event::{Audience, Delivery, InboundEvent, OutboundEvent};
pub use message_log::{DEFAULT_MESSAGE_LOG_CAPACITY, MessageLog};
pub use message_pusher::{MessagePusher, PusherChannel};
pub use registry::ConnectionRegistry;
pub use repository::SessionRepository;
pub use session::{ChatSession, SessionLimits};
pub use typing::TypingTracker;
pub use value_object::{
    ConnectionId, ConnectionIdFactory, DisplayName, MessageId, MessageText, Timestamp,
};

#[cfg(test)]
pub use message_pusher::MockMessagePusher;
#[cfg(test)]
pub use repository::MockSessionRepository;
