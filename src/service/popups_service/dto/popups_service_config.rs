#[derive(Clone, Debug)]
pub struct PopupsServiceConfig {
    /// Queue bound under order bursts; oldest popup evicted when full
    pub max_queued: usize,
}

impl Default for PopupsServiceConfig {
    fn default() -> Self {
        Self { max_queued: 5 }
    }
}
