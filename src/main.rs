use admin_notifier::{
    application::{self, ApplicationEnv},
    dto::BusinessProfile,
    service::{
        connection_service::ConnectionService, notifications_service::NotificationsService,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let state = application::create_state(&env).await?;

    state.notifications_service.set_profile(BusinessProfile {
        client_id: env.client_id.clone(),
        requires_blocking_popups: env.blocking_popups,
    });
    state.connection_service.connect();

    tracing::info!("notification pipeline running");

    application::shutdown_signal().await;

    application::close(&state);

    Ok(())
}
