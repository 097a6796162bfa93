use super::{
    dto::ConnectionServiceConfig,
    transport::{Transport, TransportConnection},
    ConnectionStatusCallback,
};
use crate::{
    dto::{input::ServerMessage, output::ClientMessage, ConnectionState},
    service::fanout_service::FanoutService,
};
use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};
use time::OffsetDateTime;
use tokio::{
    sync::mpsc,
    time::{sleep_until, Instant},
};

/// Deadline used for timers that are not armed
const IDLE: Duration = Duration::from_secs(24 * 60 * 60);

pub(super) enum Command {
    Connect,
    Disconnect,
    Reconnect,
    Authenticate(String),
    RequestTestNotification,
    SetStatusCallback(ConnectionStatusCallback),
}

pub(super) fn lock_state(state: &Mutex<ConnectionState>) -> MutexGuard<'_, ConnectionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

///
/// Owns the transport connection and every timer of the
/// reconnection state machine. All mutation happens inside
/// this task, so ordering between timers, commands and
/// inbound messages is total.
///
pub(super) struct ConnectionWorker {
    config: ConnectionServiceConfig,
    transport: Arc<dyn Transport>,
    fanout: Arc<dyn FanoutService>,

    commands_rx: mpsc::UnboundedReceiver<Command>,
    state: Arc<Mutex<ConnectionState>>,
    status_callback: Option<ConnectionStatusCallback>,

    client_id: Option<String>,
    connection: Option<Box<dyn TransportConnection>>,

    /// Raised permanently for the session after a rate-limit disconnect
    min_cooldown: Duration,
    last_attempt: Option<Instant>,

    connect_at: Option<Instant>,
    heartbeat_at: Option<Instant>,
    authenticate_at: Option<Instant>,

    ping_token: u32,
}

impl ConnectionWorker {
    pub(super) fn new(
        config: ConnectionServiceConfig,
        transport: Arc<dyn Transport>,
        fanout: Arc<dyn FanoutService>,
        commands_rx: mpsc::UnboundedReceiver<Command>,
        state: Arc<Mutex<ConnectionState>>,
    ) -> Self {
        let min_cooldown = config.connect_cooldown;

        Self {
            config,
            transport,
            fanout,
            commands_rx,
            state,
            status_callback: None,
            client_id: None,
            connection: None,
            min_cooldown,
            last_attempt: None,
            connect_at: None,
            heartbeat_at: None,
            authenticate_at: None,
            ping_token: 0,
        }
    }

    #[tracing::instrument(name = "Connection", skip_all)]
    pub(super) async fn run(mut self) {
        loop {
            let connect_deadline = self.connect_at.unwrap_or_else(|| Instant::now() + IDLE);
            let heartbeat_deadline = self.heartbeat_at.unwrap_or_else(|| Instant::now() + IDLE);
            let authenticate_deadline =
                self.authenticate_at.unwrap_or_else(|| Instant::now() + IDLE);

            tokio::select! {
                biased;

                command = self.commands_rx.recv() => {
                    match command {
                        Some(command) => self.process_command(command).await,
                        // every handle dropped, worker is done
                        None => break,
                    }
                }

                _ = sleep_until(connect_deadline), if self.connect_at.is_some() => {
                    self.try_connect().await;
                }

                _ = sleep_until(authenticate_deadline), if self.authenticate_at.is_some() => {
                    self.process_authenticate_replay().await;
                }

                _ = sleep_until(heartbeat_deadline), if self.heartbeat_at.is_some() => {
                    self.process_heartbeat().await;
                }

                message = Self::next_server_message(&mut self.connection) => {
                    self.process_server_message(message).await;
                }
            }
        }

        if let Some(mut connection) = self.connection.take() {
            connection.close().await;
        }
    }

    async fn next_server_message(
        connection: &mut Option<Box<dyn TransportConnection>>,
    ) -> Option<ServerMessage> {
        match connection.as_mut() {
            Some(connection) => connection.next().await,
            None => std::future::pending().await,
        }
    }

    async fn process_command(&mut self, command: Command) {
        match command {
            Command::Connect => self.process_connect(),
            Command::Disconnect => self.process_disconnect().await,
            Command::Reconnect => self.process_reconnect().await,
            Command::Authenticate(client_id) => self.process_authenticate(client_id).await,
            Command::RequestTestNotification => {
                tracing::info!("requesting test notification");
                self.send(ClientMessage::TestNotification).await;
            }
            Command::SetStatusCallback(callback) => {
                // single slot, new callback replaces the previous one
                self.status_callback = Some(callback);
            }
        }
    }

    fn process_connect(&mut self) {
        if self.connection.is_some() {
            tracing::debug!("connect ignored: already connected");
            return;
        }
        if self.connect_at.is_some() {
            tracing::debug!("connect deferred: attempt already scheduled");
            return;
        }

        let remaining_cooldown = match self.last_attempt {
            Some(at) => self.min_cooldown.saturating_sub(at.elapsed()),
            None => Duration::ZERO,
        };

        if !remaining_cooldown.is_zero() {
            tracing::info!(
                delay_ms = remaining_cooldown.as_millis() as u64,
                "connect deferred by cooldown"
            );
        }

        self.connect_at = Some(Instant::now() + remaining_cooldown);
    }

    async fn process_disconnect(&mut self) {
        tracing::info!("disconnecting");

        self.connect_at = None;
        self.heartbeat_at = None;
        self.authenticate_at = None;

        if let Some(mut connection) = self.connection.take() {
            connection.close().await;
        }

        {
            let mut state = lock_state(&self.state);
            state.connected = false;
        }

        self.fanout.clear();
        self.notify_status();
    }

    async fn process_reconnect(&mut self) {
        tracing::info!("explicit reconnect requested");

        self.min_cooldown = self.config.connect_cooldown;
        self.last_attempt = None;
        self.heartbeat_at = None;
        self.authenticate_at = None;

        if let Some(mut connection) = self.connection.take() {
            connection.close().await;
        }

        {
            let mut state = lock_state(&self.state);
            state.connected = false;
            state.reconnect_attempts = 0;
        }
        self.notify_status();

        self.connect_at = Some(Instant::now() + self.config.reconnect_delay);
    }

    async fn process_authenticate(&mut self, client_id: String) {
        self.client_id = Some(client_id.clone());

        if self.connection.is_some() {
            tracing::info!(%client_id, "authenticating");
            self.send(ClientMessage::Authenticate { client_id }).await;
        }
    }

    /// Authentication replay fired by the settle timer after a connect
    async fn process_authenticate_replay(&mut self) {
        self.authenticate_at = None;

        if let Some(client_id) = self.client_id.clone() {
            tracing::info!(%client_id, "replaying authentication");
            self.send(ClientMessage::Authenticate { client_id }).await;
        }
    }

    async fn process_heartbeat(&mut self) {
        self.ping_token = self.ping_token.wrapping_add(1);
        self.heartbeat_at = Some(Instant::now() + self.config.heartbeat_interval);

        let token = self.ping_token;
        tracing::trace!(token, "sending heartbeat ping");
        self.send(ClientMessage::Ping { token }).await;
    }

    async fn try_connect(&mut self) {
        self.connect_at = None;
        self.last_attempt = Some(Instant::now());

        tracing::info!("connecting");
        match self.transport.connect().await {
            Ok(connection) => {
                self.connection = Some(connection);
                self.heartbeat_at = Some(Instant::now() + self.config.heartbeat_interval);
                if self.client_id.is_some() {
                    self.authenticate_at =
                        Some(Instant::now() + self.config.authenticate_settle_delay);
                }

                {
                    let mut state = lock_state(&self.state);
                    state.connected = true;
                    state.reconnect_attempts = 0;
                    state.last_connected = Some(OffsetDateTime::now_utc());
                }
                self.notify_status();

                tracing::info!("connected");
            }
            Err(err) => {
                tracing::warn!(%err, "connect failed");
                self.handle_disconnect();
            }
        }
    }

    async fn process_server_message(&mut self, message: Option<ServerMessage>) {
        match message {
            Some(ServerMessage::Welcome { message }) => {
                tracing::info!(message = message.as_deref(), "received welcome");
            }
            Some(ServerMessage::Notification { notification }) => {
                tracing::info!(
                    id = %notification.id,
                    kind = %notification.kind,
                    "received notification"
                );
                self.fanout.dispatch(&notification);
            }
            Some(ServerMessage::Ping { token }) => {
                tracing::trace!(token, "answering server ping");
                self.send(ClientMessage::Pong { token }).await;
            }
            Some(ServerMessage::Pong { token }) => {
                tracing::trace!(token, "received pong");
            }
            Some(ServerMessage::DisconnectReason { reason }) => {
                tracing::warn!(%reason, "server announced disconnect");
                if reason.to_lowercase().contains("rate limit") {
                    self.min_cooldown = self.config.rate_limited_cooldown;
                    tracing::warn!(
                        cooldown_ms = self.min_cooldown.as_millis() as u64,
                        "raising connect cooldown for the rest of the session"
                    );
                }
            }
            None => {
                tracing::warn!("transport stream closed");
                self.handle_disconnect();
            }
        }
    }

    async fn send(&mut self, message: ClientMessage) {
        let Some(connection) = self.connection.as_mut() else {
            tracing::debug!("send skipped: not connected");
            return;
        };

        if let Err(err) = connection.send(message).await {
            tracing::warn!(%err, "send failed");
            self.handle_disconnect();
        }
    }

    ///
    /// Every transport failure funnels here: mark disconnected and
    /// either schedule a backoff retry or go terminal until an
    /// explicit reconnect().
    ///
    fn handle_disconnect(&mut self) {
        self.connection = None;
        self.heartbeat_at = None;
        self.authenticate_at = None;

        let attempts = {
            let mut state = lock_state(&self.state);
            state.connected = false;
            state.reconnect_attempts
        };

        if attempts < self.config.max_reconnect_attempts {
            let attempt = attempts + 1;
            let delay = self
                .min_cooldown
                .saturating_mul(attempt)
                .min(self.config.reconnect_max_delay)
                .max(self.min_cooldown);

            self.connect_at = Some(Instant::now() + delay);
            {
                let mut state = lock_state(&self.state);
                state.reconnect_attempts = attempt;
            }

            tracing::info!(
                attempt,
                delay_ms = delay.as_millis() as u64,
                "scheduling reconnect"
            );
        } else {
            tracing::warn!(
                attempts,
                "reconnect attempts exhausted, waiting for explicit reconnect"
            );
        }

        self.notify_status();
    }

    fn notify_status(&self) {
        let snapshot = lock_state(&self.state).clone();

        if let Some(callback) = &self.status_callback {
            callback(snapshot);
        }
    }
}
