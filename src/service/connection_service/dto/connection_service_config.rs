use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ConnectionServiceConfig {
    /// Minimum time between transport connection attempts.
    /// Debounces reconnect storms against a rate-limited server.
    pub connect_cooldown: Duration,

    /// Cooldown used for the rest of the session once the server
    /// reports rate limiting
    pub rate_limited_cooldown: Duration,

    /// Upper bound for the backoff delay
    pub reconnect_max_delay: Duration,

    /// Automatic reconnect attempts before requiring an explicit
    /// reconnect() call
    pub max_reconnect_attempts: u32,

    /// Must stay shorter than the server's heartbeat expectation
    pub heartbeat_interval: Duration,

    /// Delay between transport connect and authentication replay
    pub authenticate_settle_delay: Duration,

    /// Delay before the fresh connect of an explicit reconnect()
    pub reconnect_delay: Duration,
}

impl Default for ConnectionServiceConfig {
    fn default() -> Self {
        Self {
            connect_cooldown: Duration::from_secs(5),
            rate_limited_cooldown: Duration::from_secs(10),
            reconnect_max_delay: Duration::from_secs(30),
            max_reconnect_attempts: 5,
            heartbeat_interval: Duration::from_secs(25),
            authenticate_settle_delay: Duration::from_secs(1),
            reconnect_delay: Duration::from_millis(100),
        }
    }
}
