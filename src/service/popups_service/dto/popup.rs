use crate::dto::NotificationRecord;

///
/// One renderable blocking popup.
///
/// Only the topmost popup owns the modal backdrop; the rest stay
/// visible but inert with respect to backdrop dismissal.
///
#[derive(Clone, Debug)]
pub struct Popup {
    pub record: NotificationRecord,
    pub is_topmost: bool,
}
