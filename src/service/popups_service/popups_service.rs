use super::Popup;
use crate::dto::NotificationRecord;

#[cfg_attr(test, mockall::automock)]
pub trait PopupsService: Send + Sync {
    ///
    /// Queue a blocking popup. Backdrop ownership moves to the
    /// pushed record.
    ///
    fn push(&self, record: NotificationRecord);

    ///
    /// Remove exactly that popup. Dismissing a non-topmost popup
    /// does not disturb backdrop ownership.
    ///
    fn dismiss(&self, id: &str);

    ///
    /// Dismiss and navigate to the detail view the record points at
    /// (order or enquiry), when it carries a correlation id.
    ///
    fn view(&self, id: &str);

    /// Popups in render order, oldest first
    fn active(&self) -> Vec<Popup>;
}
