use super::transport::{Transport, TransportConnection};
use crate::{
    dto::{input::ServerMessage, output::ClientMessage},
    error::Error,
};
use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{self, Message},
    MaybeTlsStream, WebSocketStream,
};

///
/// WebSocket transport speaking the JSON notification protocol.
///
pub struct WebSocketTransport {
    url: String,
}

impl WebSocketTransport {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

#[async_trait]
impl Transport for WebSocketTransport {
    async fn connect(&self) -> Result<Box<dyn TransportConnection>, Error> {
        let (stream, _) = connect_async(&self.url)
            .await
            .map_err(|err| Error::Transport(err.to_string()))?;

        Ok(Box::new(WebSocketTransportConnection { stream }))
    }
}

pub struct WebSocketTransportConnection {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

#[async_trait]
impl TransportConnection for WebSocketTransportConnection {
    async fn send(&mut self, message: ClientMessage) -> Result<(), Error> {
        let json = serde_json::to_string(&message)?;

        self.stream
            .send(Message::Text(json))
            .await
            .map_err(|err| Error::Transport(err.to_string()))
    }

    async fn next(&mut self) -> Option<ServerMessage> {
        loop {
            match self.stream.next().await? {
                Ok(Message::Text(json)) => match serde_json::from_str(&json) {
                    Ok(message) => return Some(message),
                    Err(err) => {
                        // malformed frames are skipped, not fatal
                        tracing::warn!(%err, "failed to decode server message");
                    }
                },
                // answered automatically by tungstenite
                Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => (),
                Ok(Message::Binary(_)) | Ok(Message::Frame(_)) => {
                    tracing::warn!("ignoring unexpected binary frame");
                }
                Ok(Message::Close(_)) => return None,
                Err(tungstenite::Error::ConnectionClosed)
                | Err(tungstenite::Error::AlreadyClosed) => return None,
                Err(err) => {
                    tracing::warn!(%err, "websocket read error");
                    return None;
                }
            }
        }
    }

    async fn close(&mut self) {
        if let Err(err) = self.stream.close(None).await {
            tracing::debug!(%err, "failed to close websocket cleanly");
        }
    }
}
