use super::{audio_sink::AudioSink, tone, AlertsService};
use crate::{dto::SoundType, error::Error};
use async_trait::async_trait;
use std::{sync::Arc, time::Duration};

pub struct AlertsServiceImpl {
    sink: Arc<dyn AudioSink>,
}

impl AlertsServiceImpl {
    pub fn new(sink: Arc<dyn AudioSink>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl AlertsService for AlertsServiceImpl {
    async fn unlock(&self) -> bool {
        self.sink.ready().await
    }

    async fn play(&self, sound: SoundType, duration: Duration) -> Result<(), Error> {
        let spec = tone::spec_for(sound);
        let samples = tone::render(&spec, duration);

        tracing::debug!(
            %sound,
            duration_ms = duration.as_millis() as u64,
            samples = samples.len(),
            "playing alert tone"
        );

        self.sink.play(samples, tone::SAMPLE_RATE).await
    }
}
