use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct NotificationsStoreConfig {
    pub directory: PathBuf,

    /// Maximum number of persisted records; oldest discarded first
    pub capacity: usize,
}

impl NotificationsStoreConfig {
    pub fn new(directory: PathBuf) -> Self {
        Self {
            directory,
            capacity: 50,
        }
    }
}
