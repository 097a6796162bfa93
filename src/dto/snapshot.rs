use super::{ConnectionState, NotificationRecord, NotificationSettings};

///
/// Read model consumed by the UI shell.
///
#[derive(Clone, Debug)]
pub struct DashboardSnapshot {
    pub records: Vec<NotificationRecord>,
    pub unread_count: usize,
    pub settings: NotificationSettings,
    pub connection: ConnectionState,
}
