use crate::dto::{NotificationRecord, NotificationSettings};
use async_trait::async_trait;
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsStore: Send + Sync {
    ///
    /// Load the persisted records, newest-first.
    ///
    /// Corrupt or missing data yields an empty list, never an error.
    ///
    async fn load(&self) -> Vec<NotificationRecord>;

    ///
    /// Prepend a record, truncate to capacity, write back.
    ///
    /// ### Returns
    /// The updated list (truncation applied)
    ///
    async fn append(&self, record: NotificationRecord) -> Vec<NotificationRecord>;

    ///
    /// Mark a single record read. No-op when the id is absent.
    ///
    async fn mark_read(&self, id: &str) -> Vec<NotificationRecord>;

    ///
    /// Mark every record read and stamp the last-read marker.
    ///
    async fn mark_all_read(&self) -> Vec<NotificationRecord>;

    ///
    /// Remove all persisted records. Settings are untouched.
    ///
    async fn clear(&self);

    async fn last_read_at(&self) -> Option<OffsetDateTime>;

    ///
    /// Load settings, filling fields missing from the persisted
    /// data with defaults.
    ///
    async fn load_settings(&self) -> NotificationSettings;

    async fn save_settings(&self, settings: NotificationSettings);
}

pub fn unread_count(records: &[NotificationRecord]) -> usize {
    records.iter().filter(|record| !record.read).count()
}
