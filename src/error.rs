#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("not connected")]
    NotConnected,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("audio unavailable: {0}")]
    AudioUnavailable(&'static str),
}
