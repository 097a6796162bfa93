use serde::Serialize;

///
/// Messages sent to the notification server.
///
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientMessage {
    #[serde(rename_all = "camelCase")]
    Authenticate {
        client_id: String,
    },
    Ping {
        token: u32,
    },
    Pong {
        token: u32,
    },
    /// Requests a server-generated TEST notification that
    /// round-trips through the regular delivery path
    TestNotification,
}
