use super::SettingsUpdate;
use crate::{
    dto::{BusinessProfile, DashboardSnapshot, NotificationRecord, NotificationSettings},
    error::Error,
};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    ///
    /// Single entry point for every delivered event: persist it,
    /// queue a blocking popup for attention-required types (when the
    /// business profile asks for them), play the alert tone and show
    /// a toast. Each step is independently fault-tolerant.
    ///
    async fn handle_incoming(&self, record: NotificationRecord);

    ///
    /// Mark one record read. No-op for unknown ids.
    ///
    /// ### Returns
    /// The updated record list
    ///
    async fn mark_as_read(&self, id: &str) -> Vec<NotificationRecord>;

    async fn mark_all_as_read(&self) -> Vec<NotificationRecord>;

    async fn clear_all_notifications(&self) -> Vec<NotificationRecord>;

    ///
    /// Merge the partial update into current settings and persist
    /// the whole object.
    ///
    async fn update_settings(&self, update: SettingsUpdate) -> NotificationSettings;

    ///
    /// Ask the server for a TEST notification that round-trips
    /// through the real delivery pipeline.
    ///
    /// ### Errors
    /// - [Error::NotConnected]
    ///
    async fn send_test_notification(&self) -> Result<(), Error>;

    async fn snapshot(&self) -> DashboardSnapshot;

    ///
    /// Push the active business identity. Re-issues authentication;
    /// called again on every profile change.
    ///
    fn set_profile(&self, profile: BusinessProfile);

    ///
    /// First user click/keypress/touch after load; used as an
    /// opportunistic audio-unlock probe.
    ///
    async fn notify_user_gesture(&self);
}
