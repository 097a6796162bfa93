use crate::{dto::SoundType, error::Error};
use async_trait::async_trait;
use std::time::Duration;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlertsService: Send + Sync {
    ///
    /// Probe whether playback is currently permitted.
    ///
    /// Some runtimes block audio until a user gesture, so this is
    /// called eagerly at startup and again on the first gesture.
    ///
    async fn unlock(&self) -> bool;

    ///
    /// Play the alert tone for the given sound type.
    ///
    /// ### Errors
    /// - [Error::AudioUnavailable] when no output device accepts
    ///   the samples
    ///
    async fn play(&self, sound: SoundType, duration: Duration) -> Result<(), Error>;
}
