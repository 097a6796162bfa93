use super::{NotificationsStore, NotificationsStoreConfig};
use crate::dto::{NotificationRecord, NotificationSettings};
use async_trait::async_trait;
use std::path::PathBuf;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tokio::sync::Mutex;

const NOTIFICATIONS_FILE: &str = "admin_notifications.json";
const SETTINGS_FILE: &str = "notification_settings.json";
const LAST_READ_FILE: &str = "notifications_last_read";

///
/// File-backed store.
///
/// The in-memory list stays authoritative for the session:
/// it is loaded once, every mutation goes through it under
/// a single lock (read-modify-write safety for overlapping
/// events), and file writes are best-effort.
///
pub struct NotificationsStoreImpl {
    config: NotificationsStoreConfig,

    records: Mutex<Option<Vec<NotificationRecord>>>,
}

impl NotificationsStoreImpl {
    pub fn new(config: NotificationsStoreConfig) -> Self {
        let records = Mutex::new(None);

        Self { config, records }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.config.directory.join(file)
    }

    async fn loaded<'a>(
        &self,
        cache: &'a mut Option<Vec<NotificationRecord>>,
    ) -> &'a mut Vec<NotificationRecord> {
        if cache.is_none() {
            *cache = Some(self.read_records().await);
        }

        // Filled right above
        cache.as_mut().unwrap()
    }

    async fn read_records(&self) -> Vec<NotificationRecord> {
        let path = self.path(NOTIFICATIONS_FILE);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                tracing::warn!(%err, "failed to read notifications file");
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(%err, "notifications file corrupt, starting empty");
                Vec::new()
            }
        }
    }

    async fn persist_records(&self, records: &[NotificationRecord]) {
        let content = match serde_json::to_string(records) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(%err, "failed to serialize notifications");
                return;
            }
        };

        self.write_file(NOTIFICATIONS_FILE, &content).await;
    }

    async fn write_file(&self, file: &str, content: &str) {
        if let Err(err) = tokio::fs::create_dir_all(&self.config.directory).await {
            tracing::warn!(%err, "failed to create storage directory");
            return;
        }

        if let Err(err) = tokio::fs::write(self.path(file), content).await {
            tracing::warn!(%err, file, "failed to write storage file");
        }
    }
}

#[async_trait]
impl NotificationsStore for NotificationsStoreImpl {
    async fn load(&self) -> Vec<NotificationRecord> {
        let mut cache = self.records.lock().await;
        self.loaded(&mut cache).await.clone()
    }

    async fn append(&self, record: NotificationRecord) -> Vec<NotificationRecord> {
        let mut cache = self.records.lock().await;
        let records = self.loaded(&mut cache).await;

        records.insert(0, record);
        records.truncate(self.config.capacity);
        let records = records.clone();

        self.persist_records(&records).await;

        records
    }

    async fn mark_read(&self, id: &str) -> Vec<NotificationRecord> {
        let mut cache = self.records.lock().await;
        let records = self.loaded(&mut cache).await;

        match records.iter_mut().find(|record| record.id == id) {
            Some(record) => record.read = true,
            None => tracing::debug!(id, "mark_read: no such notification"),
        }
        let records = records.clone();

        self.persist_records(&records).await;

        records
    }

    async fn mark_all_read(&self) -> Vec<NotificationRecord> {
        let mut cache = self.records.lock().await;
        let records = self.loaded(&mut cache).await;

        records.iter_mut().for_each(|record| record.read = true);
        let records = records.clone();

        self.persist_records(&records).await;

        match OffsetDateTime::now_utc().format(&Rfc3339) {
            Ok(timestamp) => self.write_file(LAST_READ_FILE, &timestamp).await,
            Err(err) => tracing::warn!(%err, "failed to format last-read timestamp"),
        }

        records
    }

    async fn clear(&self) {
        let mut cache = self.records.lock().await;
        *cache = Some(Vec::new());

        match tokio::fs::remove_file(self.path(NOTIFICATIONS_FILE)).await {
            Ok(()) => (),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => (),
            Err(err) => tracing::warn!(%err, "failed to remove notifications file"),
        }
    }

    async fn last_read_at(&self) -> Option<OffsetDateTime> {
        let content = tokio::fs::read_to_string(self.path(LAST_READ_FILE))
            .await
            .ok()?;

        OffsetDateTime::parse(content.trim(), &Rfc3339).ok()
    }

    async fn load_settings(&self) -> NotificationSettings {
        let content = match tokio::fs::read_to_string(self.path(SETTINGS_FILE)).await {
            Ok(content) => content,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(%err, "failed to read settings file");
                }
                return NotificationSettings::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(%err, "settings file corrupt, using defaults");
                NotificationSettings::default()
            }
        }
    }

    async fn save_settings(&self, settings: NotificationSettings) {
        match serde_json::to_string(&settings) {
            Ok(content) => self.write_file(SETTINGS_FILE, &content).await,
            Err(err) => tracing::warn!(%err, "failed to serialize settings"),
        }
    }
}
