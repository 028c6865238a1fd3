//! Conversion logic between DTOs and domain types.

use hiroba_shared::time::timestamp_to_rfc3339;

use crate::domain::{
    ChatMessage, ConnectionId, DisplayName, InboundEvent, MessageText, OutboundEvent,
    Participant, ValueObjectError,
};
use crate::infrastructure::dto::websocket as dto;

// ========================================
// DTO → Domain
// ========================================

impl TryFrom<dto::ClientEvent> for InboundEvent {
    type Error = ValueObjectError;

    fn try_from(event: dto::ClientEvent) -> Result<Self, Self::Error> {
        Ok(match event {
            dto::ClientEvent::Join { display_name } => InboundEvent::Join {
                display_name: DisplayName::new(display_name),
            },
            dto::ClientEvent::Send { text } => InboundEvent::Send {
                text: MessageText::new(text),
            },
            dto::ClientEvent::Typing { is_typing } => InboundEvent::Typing { is_typing },
            dto::ClientEvent::PrivateSend { to, text } => InboundEvent::PrivateSend {
                to: ConnectionId::new(to)?,
                text: MessageText::new(text),
            },
        })
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<&Participant> for dto::ParticipantDto {
    fn from(participant: &Participant) -> Self {
        Self {
            connection_id: participant.connection_id.as_str().to_string(),
            display_name: participant.display_name.as_str().to_string(),
        }
    }
}

impl From<&ChatMessage> for dto::MessageDto {
    fn from(message: &ChatMessage) -> Self {
        Self {
            id: message.id.value(),
            text: message.text.as_str().to_string(),
            sender_name: message.sender_name.as_str().to_string(),
            sender_id: message.sender_id.as_str().to_string(),
            sent_at: timestamp_to_rfc3339(message.sent_at.value()),
            is_private: message.is_private(),
            recipient_id: message
                .recipient
                .as_ref()
                .map(|id| id.as_str().to_string()),
        }
    }
}

impl From<&OutboundEvent> for dto::ServerEvent {
    fn from(event: &OutboundEvent) -> Self {
        match event {
            OutboundEvent::Connected { connection_id } => dto::ServerEvent::Connected {
                connection_id: connection_id.as_str().to_string(),
            },
            OutboundEvent::ParticipantList(participants) => dto::ServerEvent::ParticipantList {
                participants: participants.iter().map(dto::ParticipantDto::from).collect(),
            },
            OutboundEvent::ParticipantJoined(participant) => {
                dto::ServerEvent::ParticipantJoined {
                    connection_id: participant.connection_id.as_str().to_string(),
                    display_name: participant.display_name.as_str().to_string(),
                }
            }
            OutboundEvent::ParticipantLeft(participant) => dto::ServerEvent::ParticipantLeft {
                connection_id: participant.connection_id.as_str().to_string(),
                display_name: participant.display_name.as_str().to_string(),
            },
            OutboundEvent::MessageReceived(message) => dto::ServerEvent::MessageReceived {
                message: message.into(),
            },
            OutboundEvent::TypingList(names) => dto::ServerEvent::TypingList {
                display_names: names.iter().map(|n| n.as_str().to_string()).collect(),
            },
            OutboundEvent::PrivateMessage(message) => dto::ServerEvent::PrivateMessage {
                message: message.into(),
            },
        }
    }
}
