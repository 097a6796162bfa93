use crate::dto::NotificationRecord;
use serde::Deserialize;

///
/// Messages pushed by the notification server.
///
#[derive(Deserialize, Clone, Debug)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerMessage {
    Welcome {
        message: Option<String>,
    },
    Notification {
        notification: NotificationRecord,
    },
    /// Server heartbeat, answered with a pong carrying the same token
    Ping {
        #[serde(default)]
        token: u32,
    },
    Pong {
        #[serde(default)]
        token: u32,
    },
    #[serde(rename = "disconnect_reason")]
    DisconnectReason {
        reason: String,
    },
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dto::NotificationType;
    use serde_json::json;

    #[test]
    fn server_message_deserialize_notification() {
        let json = json!({
            "type": "notification",
            "notification": {
                "id": "n-1",
                "type": "NEW_ORDER",
                "payload": { "title": "New order", "message": "#7" },
                "timestamp": "2024-06-01T12:00:00Z",
            },
        });

        let message = serde_json::from_value::<ServerMessage>(json).unwrap();

        let ServerMessage::Notification { notification } = message else {
            panic!("invalid message type");
        };
        assert_eq!(notification.kind, NotificationType::NewOrder);
    }

    #[test]
    fn server_message_deserialize_ping_without_token() {
        let message = serde_json::from_value::<ServerMessage>(json!({ "type": "ping" })).unwrap();

        assert!(matches!(message, ServerMessage::Ping { token: 0 }));
    }

    #[test]
    fn server_message_deserialize_disconnect_reason() {
        let json = json!({
            "type": "disconnect_reason",
            "reason": "Rate limit exceeded",
        });

        let message = serde_json::from_value::<ServerMessage>(json).unwrap();

        let ServerMessage::DisconnectReason { reason } = message else {
            panic!("invalid message type");
        };
        assert_eq!(reason, "Rate limit exceeded");
    }
}
