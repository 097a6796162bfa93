use crate::{
    dto::{input::ServerMessage, output::ClientMessage},
    error::Error,
};
use async_trait::async_trait;

///
/// Factory for persistent connections to the notification server.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    ///
    /// Open a fresh connection.
    ///
    /// ### Errors
    /// - [Error::Transport] when the server is unreachable
    ///   or rejects the handshake
    ///
    async fn connect(&self) -> Result<Box<dyn TransportConnection>, Error>;
}

#[async_trait]
pub trait TransportConnection: Send {
    ///
    /// ### Errors
    /// - [Error::Transport] when the connection is no longer usable
    ///
    async fn send(&mut self, message: ClientMessage) -> Result<(), Error>;

    ///
    /// Next inbound message. `None` means the connection closed.
    ///
    async fn next(&mut self) -> Option<ServerMessage>;

    async fn close(&mut self);
}
