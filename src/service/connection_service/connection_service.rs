use crate::{dto::ConnectionState, error::Error};

pub type ConnectionStatusCallback = Box<dyn Fn(ConnectionState) + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
pub trait ConnectionService: Send + Sync {
    ///
    /// Establish the connection.
    ///
    /// Idempotent: a no-op while connected, and deferred (not dropped)
    /// when called within the connect cooldown window.
    ///
    fn connect(&self);

    ///
    /// Tear down the transport, cancel every pending timer and release
    /// registered notification listeners.
    ///
    /// Intended for process teardown, not for reconnect cycles.
    ///
    fn disconnect(&self);

    ///
    /// Explicit user-triggered retry: resets the attempt counter and
    /// cooldown, then performs a full disconnect + fresh connect.
    ///
    fn reconnect(&self);

    ///
    /// Store the client identity for replay on every reconnect and,
    /// when currently connected, emit the authentication message now.
    ///
    /// Safe to call before any connection exists.
    ///
    fn authenticate(&self, client_id: String);

    ///
    /// Ask the server to produce a TEST notification.
    ///
    /// ### Errors
    /// - [Error::NotConnected]
    ///
    fn request_test_notification(&self) -> Result<(), Error>;

    ///
    /// Single callback slot notified after every state transition.
    /// Setting a new callback replaces the previous one.
    ///
    fn set_status_callback(&self, callback: ConnectionStatusCallback);

    fn state(&self) -> ConnectionState;
}
