use super::ApplicationEnv;
use crate::{
    service::{
        alerts_service::AlertsServiceImpl,
        connection_service::{
            ConnectionService, ConnectionServiceConfig, ConnectionServiceImpl, WebSocketTransport,
        },
        fanout_service::{FanoutService, FanoutServiceImpl},
        notifications_service::{NotificationsService, NotificationsServiceImpl},
        notifications_store::{NotificationsStoreConfig, NotificationsStoreImpl},
        popups_service::{PopupsService, PopupsServiceConfig, PopupsServiceImpl},
    },
    shell::{ConsoleAudioSink, ConsoleShell},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ApplicationState {
    pub notifications_service: Arc<dyn NotificationsService>,
    pub connection_service: Arc<dyn ConnectionService>,
    pub popups_service: Arc<dyn PopupsService>,
    pub fanout_service: Arc<dyn FanoutService>,
}

pub async fn create_state(env: &ApplicationEnv) -> anyhow::Result<ApplicationState> {
    tracing::info!("creating services");

    let shell = Arc::new(ConsoleShell);
    let audio_sink = Arc::new(ConsoleAudioSink);

    let config = NotificationsStoreConfig::new(env.storage_directory.clone());
    let notifications_store = NotificationsStoreImpl::new(config);
    let notifications_store = Arc::new(notifications_store);

    let fanout_service = FanoutServiceImpl::new();
    let fanout_service: Arc<dyn FanoutService> = Arc::new(fanout_service);

    let transport = WebSocketTransport::new(env.server_url.clone());
    let transport = Arc::new(transport);

    let config = ConnectionServiceConfig::default();
    let connection_service = ConnectionServiceImpl::new(config, transport, fanout_service.clone());
    let connection_service = Arc::new(connection_service);

    let alerts_service = AlertsServiceImpl::new(audio_sink);
    let alerts_service = Arc::new(alerts_service);

    let config = PopupsServiceConfig::default();
    let popups_service = PopupsServiceImpl::new(config, shell.clone());
    let popups_service = Arc::new(popups_service);

    let notifications_service = NotificationsServiceImpl::new(
        notifications_store,
        connection_service.clone(),
        alerts_service,
        popups_service.clone(),
        shell,
    );
    notifications_service.attach(fanout_service.as_ref()).await;

    Ok(ApplicationState {
        notifications_service,
        connection_service,
        popups_service,
        fanout_service,
    })
}
