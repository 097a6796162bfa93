use time::OffsetDateTime;

///
/// Snapshot of the connection manager state.
///
/// Owned and mutated exclusively by the connection service;
/// everyone else receives read-only copies through the
/// status callback.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConnectionState {
    pub connected: bool,
    pub reconnect_attempts: u32,
    pub last_connected: Option<OffsetDateTime>,
}
