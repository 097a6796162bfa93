use crate::{error::Error, service::alerts_service::AudioSink};
use async_trait::async_trait;
use std::time::Duration;
use tokio::io::AsyncWriteExt;

///
/// Headless hosts have no PCM device; ring the terminal bell and
/// hold for the length of the rendered tone instead. The stdout
/// handle is acquired per playback and released right after.
///
pub struct ConsoleAudioSink;

#[async_trait]
impl AudioSink for ConsoleAudioSink {
    async fn ready(&self) -> bool {
        true
    }

    async fn play(&self, samples: Vec<f32>, sample_rate: u32) -> Result<(), Error> {
        let duration = Duration::from_secs_f64(samples.len() as f64 / sample_rate as f64);

        {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(b"\x07")
                .await
                .map_err(|_| Error::AudioUnavailable("terminal rejected bell output"))?;
            stdout
                .flush()
                .await
                .map_err(|_| Error::AudioUnavailable("terminal rejected bell output"))?;
        }

        tokio::time::sleep(duration).await;

        Ok(())
    }
}
