use crate::dto::NotificationRecord;
use std::sync::Arc;

pub type NotificationListener = Arc<dyn Fn(&NotificationRecord) + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
pub trait FanoutService: Send + Sync {
    ///
    /// Register a listener under a caller-chosen key.
    ///
    /// Re-registration under an existing key replaces the previous
    /// listener. This is intentional: UI subtrees re-register on every
    /// re-render and must never end up invoked twice per event.
    ///
    fn register(&self, key: &str, listener: NotificationListener);

    fn unregister(&self, key: &str);

    ///
    /// Deliver the record to every listener registered at call time.
    ///
    /// The listener set is snapshotted first, so registrations made
    /// during dispatch take effect from the next event. A panicking
    /// listener never prevents delivery to the remaining ones.
    ///
    fn dispatch(&self, record: &NotificationRecord);

    /// Drops every listener. Used on connection teardown.
    fn clear(&self);
}
