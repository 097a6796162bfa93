use crate::error::Error;
use async_trait::async_trait;

///
/// Playback device seam.
///
/// Implementations must acquire the underlying audio resource per
/// call and release it when playback completes or is interrupted;
/// nothing may stay allocated between alerts.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AudioSink: Send + Sync {
    /// Whether the device would accept samples right now
    async fn ready(&self) -> bool;

    ///
    /// Play mono f32 samples to completion.
    ///
    /// ### Errors
    /// - [Error::AudioUnavailable]
    ///
    async fn play(&self, samples: Vec<f32>, sample_rate: u32) -> Result<(), Error>;
}
