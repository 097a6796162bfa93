use super::{
    connection_worker::{lock_state, Command, ConnectionWorker},
    dto::ConnectionServiceConfig,
    transport::Transport,
    ConnectionService, ConnectionStatusCallback,
};
use crate::{dto::ConnectionState, error::Error, service::fanout_service::FanoutService};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

///
/// Facade over the connection worker task.
///
/// Every operation is a command queued to the worker, so callers
/// never block and never observe transport errors directly.
///
pub struct ConnectionServiceImpl {
    commands_tx: mpsc::UnboundedSender<Command>,
    state: Arc<Mutex<ConnectionState>>,
}

impl ConnectionServiceImpl {
    ///
    /// Spawns the worker task. Must be called within a tokio runtime.
    ///
    pub fn new(
        config: ConnectionServiceConfig,
        transport: Arc<dyn Transport>,
        fanout: Arc<dyn FanoutService>,
    ) -> Self {
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let state = Arc::new(Mutex::new(ConnectionState::default()));

        let worker = ConnectionWorker::new(config, transport, fanout, commands_rx, state.clone());
        tokio::spawn(worker.run());

        Self { commands_tx, state }
    }

    fn send_command(&self, command: Command) {
        // worker outlives every handle, failure only happens at shutdown
        let _ = self.commands_tx.send(command);
    }
}

impl ConnectionService for ConnectionServiceImpl {
    fn connect(&self) {
        self.send_command(Command::Connect);
    }

    fn disconnect(&self) {
        self.send_command(Command::Disconnect);
    }

    fn reconnect(&self) {
        self.send_command(Command::Reconnect);
    }

    fn authenticate(&self, client_id: String) {
        self.send_command(Command::Authenticate(client_id));
    }

    fn request_test_notification(&self) -> Result<(), Error> {
        if !self.state().connected {
            return Err(Error::NotConnected);
        }

        self.send_command(Command::RequestTestNotification);
        Ok(())
    }

    fn set_status_callback(&self, callback: ConnectionStatusCallback) {
        self.send_command(Command::SetStatusCallback(callback));
    }

    fn state(&self) -> ConnectionState {
        lock_state(&self.state).clone()
    }
}
