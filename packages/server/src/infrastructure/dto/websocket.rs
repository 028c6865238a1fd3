//! WebSocket event DTOs.
//!
//! Every frame is a JSON object tagged by `type` (kebab-case) with camelCase fields.

use serde::{Deserialize, Serialize};

/// Client → Server events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientEvent {
    #[serde(rename_all = "camelCase")]
    Join { display_name: String },
    Send {
        #[serde(alias = "message")]
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    Typing { is_typing: bool },
    PrivateSend { to: String, text: String },
}

/// Server → Client events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerEvent {
    #[serde(rename_all = "camelCase")]
    Connected { connection_id: String },
    ParticipantList { participants: Vec<ParticipantDto> },
    #[serde(rename_all = "camelCase")]
    ParticipantJoined {
        connection_id: String,
        display_name: String,
    },
    #[serde(rename_all = "camelCase")]
    ParticipantLeft {
        connection_id: String,
        display_name: String,
    },
    MessageReceived { message: MessageDto },
    #[serde(rename_all = "camelCase")]
    TypingList { display_names: Vec<String> },
    PrivateMessage { message: MessageDto },
}

/// Participant information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub connection_id: String,
    pub display_name: String,
}

/// Chat message (broadcast or private)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: u64,
    pub text: String,
    pub sender_name: String,
    pub sender_id: String,
    /// RFC 3339 (UTC)
    pub sent_at: String,
    pub is_private: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_join_event() {
        // テスト項目: join イベントの JSON を解釈できる
        // given (前提条件):
        let json = r#"{"type":"join","displayName":"alice"}"#;

        // when (操作):
        let event: ClientEvent = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert_eq!(
            event,
            ClientEvent::Join {
                display_name: "alice".to_string()
            }
        );
    }

    #[test]
    fn test_parse_send_event_accepts_message_alias() {
        // テスト項目: send イベントは `message` フィールドも本文として受け付ける
        // given (前提条件):
        let json = r#"{"type":"send","message":"hi"}"#;

        // when (操作):
        let event: ClientEvent = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert_eq!(
            event,
            ClientEvent::Send {
                text: "hi".to_string()
            }
        );
    }

    #[test]
    fn test_parse_private_send_event() {
        // テスト項目: private-send イベントの JSON を解釈できる
        // given (前提条件):
        let json = r#"{"type":"private-send","to":"c2","text":"secret"}"#;

        // when (操作):
        let event: ClientEvent = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert_eq!(
            event,
            ClientEvent::PrivateSend {
                to: "c2".to_string(),
                text: "secret".to_string()
            }
        );
    }

    #[test]
    fn test_parse_event_missing_field_fails() {
        // テスト項目: 必須フィールドが欠けた JSON はエラーになる
        // given (前提条件):
        let json = r#"{"type":"typing"}"#;

        // when (操作):
        let result = serde_json::from_str::<ClientEvent>(json);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_typing_list_uses_kebab_case_tag_and_camel_case_fields() {
        // テスト項目: 出力イベントは kebab-case の type と camelCase のフィールドになる
        // given (前提条件):
        let event = ServerEvent::TypingList {
            display_names: vec!["alice".to_string()],
        };

        // when (操作):
        let json = serde_json::to_value(&event).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            serde_json::json!({"type": "typing-list", "displayNames": ["alice"]})
        );
    }

    #[test]
    fn test_serialize_broadcast_message_omits_recipient() {
        // テスト項目: 全員宛てメッセージには recipientId が含まれない
        // given (前提条件):
        let message = MessageDto {
            id: 1,
            text: "hi".to_string(),
            sender_name: "alice".to_string(),
            sender_id: "c1".to_string(),
            sent_at: "2023-01-01T00:00:00.000Z".to_string(),
            is_private: false,
            recipient_id: None,
        };

        // when (操作):
        let json = serde_json::to_value(&message).unwrap();

        // then (期待する結果):
        assert!(json.get("recipientId").is_none());
        assert_eq!(json["senderName"], "alice");
        assert_eq!(json["isPrivate"], false);
    }
}
