use super::ApplicationState;
use crate::service::{connection_service::ConnectionService, fanout_service::FanoutService};

pub fn close(state: &ApplicationState) {
    tracing::info!("disconnecting from notification server");
    state.connection_service.disconnect();

    tracing::info!("detaching listeners");
    state.fanout_service.clear();
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("starting shutdown");
}
