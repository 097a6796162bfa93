use super::{NotificationsService, SettingsUpdate};
use crate::{
    dto::{BusinessProfile, DashboardSnapshot, NotificationRecord, NotificationSettings},
    error::Error,
    service::{
        alerts_service::AlertsService,
        connection_service::ConnectionService,
        fanout_service::FanoutService,
        notifications_store::{unread_count, NotificationsStore},
        popups_service::PopupsService,
    },
    shell::{Toast, UiShell},
};
use async_trait::async_trait;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, PoisonError, RwLock,
    },
    time::Duration,
};
use uuid::Uuid;

/// Fan-out key of the orchestrator itself
pub const LISTENER_KEY: &str = "notifications-service";

pub struct NotificationsServiceImpl {
    store: Arc<dyn NotificationsStore>,
    connection: Arc<dyn ConnectionService>,
    alerts: Arc<dyn AlertsService>,
    popups: Arc<dyn PopupsService>,
    shell: Arc<dyn UiShell>,

    settings: RwLock<NotificationSettings>,
    profile: RwLock<Option<BusinessProfile>>,

    audio_unlocked: AtomicBool,
    /// Latch: the enable-sound prompt shows at most once per session
    sound_prompt_shown: AtomicBool,
}

impl NotificationsServiceImpl {
    pub fn new(
        store: Arc<dyn NotificationsStore>,
        connection: Arc<dyn ConnectionService>,
        alerts: Arc<dyn AlertsService>,
        popups: Arc<dyn PopupsService>,
        shell: Arc<dyn UiShell>,
    ) -> Arc<Self> {
        Arc::new(Self {
            store,
            connection,
            alerts,
            popups,
            shell,
            settings: RwLock::new(NotificationSettings::default()),
            profile: RwLock::new(None),
            audio_unlocked: AtomicBool::new(false),
            sound_prompt_shown: AtomicBool::new(false),
        })
    }

    ///
    /// Wire the service into the pipeline: load persisted settings,
    /// probe audio, register as a fan-out listener and hook the
    /// connection status callback so authentication replays whenever
    /// the transport comes up (profile load and socket connect race
    /// independently, either may happen first).
    ///
    pub async fn attach(self: &Arc<Self>, fanout: &dyn FanoutService) {
        let settings = self.store.load_settings().await;
        *self
            .settings
            .write()
            .unwrap_or_else(PoisonError::into_inner) = settings;

        if self.alerts.unlock().await {
            self.audio_unlocked.store(true, Ordering::Relaxed);
        }

        let service = Arc::clone(self);
        fanout.register(
            LISTENER_KEY,
            Arc::new(move |record| {
                let service = Arc::clone(&service);
                let record = record.clone();
                tokio::spawn(async move {
                    service.handle_incoming(record).await;
                });
            }),
        );

        let service = Arc::downgrade(self);
        self.connection.set_status_callback(Box::new(move |state| {
            let Some(service) = service.upgrade() else {
                return;
            };

            if state.connected {
                if let Some(profile) = service.profile_snapshot() {
                    service.connection.authenticate(profile.client_id);
                }
            }
        }));
    }

    fn settings_snapshot(&self) -> NotificationSettings {
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn profile_snapshot(&self) -> Option<BusinessProfile> {
        self.profile
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn play_alert(&self, settings: &NotificationSettings) {
        if !self.audio_unlocked.load(Ordering::Relaxed) {
            if self.alerts.unlock().await {
                self.audio_unlocked.store(true, Ordering::Relaxed);
            } else {
                self.prompt_sound_once();
                return;
            }
        }

        let duration = Duration::from_millis(settings.sound_duration);
        if let Err(err) = self.alerts.play(settings.sound_type, duration).await {
            tracing::warn!(%err, "alert playback failed, degrading to toast only");
            self.prompt_sound_once();
        }
    }

    fn prompt_sound_once(&self) {
        if !self.sound_prompt_shown.swap(true, Ordering::Relaxed) {
            self.shell.sound_prompt();
        }
    }
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    async fn handle_incoming(&self, record: NotificationRecord) {
        let mut record = record;
        if record.id.is_empty() {
            record.id = Uuid::new_v4().to_string();
        }

        tracing::info!(id = %record.id, kind = %record.kind, "handling notification");

        self.store.append(record.clone()).await;

        let blocking = record.kind.requires_attention()
            && self
                .profile_snapshot()
                .map(|profile| profile.requires_blocking_popups)
                .unwrap_or(false);
        if blocking {
            self.popups.push(record.clone());
        }

        let settings = self.settings_snapshot();

        if settings.sound_enabled {
            self.play_alert(&settings).await;
        }

        if settings.show_toast {
            let duration = settings
                .auto_hide_toast
                .then(|| Duration::from_millis(settings.toast_duration));
            self.shell.toast(Toast {
                title: record.payload.title.clone(),
                message: record.payload.message.clone(),
                duration,
            });
        }
    }

    async fn mark_as_read(&self, id: &str) -> Vec<NotificationRecord> {
        self.store.mark_read(id).await
    }

    async fn mark_all_as_read(&self) -> Vec<NotificationRecord> {
        self.store.mark_all_read().await
    }

    async fn clear_all_notifications(&self) -> Vec<NotificationRecord> {
        self.store.clear().await;
        Vec::new()
    }

    async fn update_settings(&self, update: SettingsUpdate) -> NotificationSettings {
        let merged = {
            let mut settings = self
                .settings
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            update.merge_into(&mut settings);
            settings.clone()
        };

        // merge first, then persist the whole object
        self.store.save_settings(merged.clone()).await;

        merged
    }

    async fn send_test_notification(&self) -> Result<(), Error> {
        self.connection.request_test_notification()
    }

    async fn snapshot(&self) -> DashboardSnapshot {
        let records = self.store.load().await;
        let unread_count = unread_count(&records);

        DashboardSnapshot {
            records,
            unread_count,
            settings: self.settings_snapshot(),
            connection: self.connection.state(),
        }
    }

    fn set_profile(&self, profile: BusinessProfile) {
        tracing::info!(
            client_id = %profile.client_id,
            requires_blocking_popups = profile.requires_blocking_popups,
            "business profile updated"
        );

        self.connection.authenticate(profile.client_id.clone());

        *self
            .profile
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(profile);
    }

    async fn notify_user_gesture(&self) {
        if self.audio_unlocked.load(Ordering::Relaxed) {
            return;
        }

        if self.alerts.unlock().await {
            self.audio_unlocked.store(true, Ordering::Relaxed);
            tracing::info!("audio unlocked by user gesture");
        }
    }
}
