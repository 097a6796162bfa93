use admin_notifier::{
    error::Error,
    service::alerts_service::AudioSink,
    shell::{NavigationTarget, Toast, UiShell},
};
use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use serde_json::Value;
use std::{
    future::Future,
    path::PathBuf,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};
use tokio::{
    net::{TcpListener, TcpStream},
    sync::mpsc,
    time::{sleep, Instant},
};
use tokio_tungstenite::{accept_async, tungstenite::Message, WebSocketStream};
use uuid::Uuid;

///
/// In-process notification server. Every accepted websocket is
/// handed over as a [ServerConnection].
///
pub async fn spawn_server() -> anyhow::Result<(String, mpsc::UnboundedReceiver<ServerConnection>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let url = format!("ws://{}", listener.local_addr()?);

    let (connections_tx, connections_rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let Ok(ws) = accept_async(stream).await else {
                continue;
            };
            if connections_tx.send(ServerConnection { ws }).is_err() {
                return;
            }
        }
    });

    Ok((url, connections_rx))
}

pub struct ServerConnection {
    ws: WebSocketStream<TcpStream>,
}

impl ServerConnection {
    pub async fn send(&mut self, message: Value) -> anyhow::Result<()> {
        self.ws.send(Message::Text(message.to_string())).await?;
        Ok(())
    }

    ///
    /// Next JSON text frame from the client; non-text frames are
    /// skipped.
    ///
    pub async fn recv(&mut self) -> anyhow::Result<Value> {
        loop {
            let message = self
                .ws
                .next()
                .await
                .ok_or_else(|| anyhow::anyhow!("client closed the connection"))??;
            if let Message::Text(json) = message {
                return Ok(serde_json::from_str(&json)?);
            }
        }
    }
}

///
/// Shell double recording every toast and navigation.
///
#[derive(Default)]
pub struct CaptureShell {
    pub toasts: Mutex<Vec<Toast>>,
    pub navigations: Mutex<Vec<NavigationTarget>>,
}

impl UiShell for CaptureShell {
    fn toast(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }

    fn sound_prompt(&self) {}

    fn navigate(&self, target: NavigationTarget) {
        self.navigations.lock().unwrap().push(target);
    }
}

#[derive(Default)]
pub struct CaptureAudioSink {
    pub playbacks: AtomicUsize,
}

#[async_trait]
impl AudioSink for CaptureAudioSink {
    async fn ready(&self) -> bool {
        true
    }

    async fn play(&self, _samples: Vec<f32>, _sample_rate: u32) -> Result<(), Error> {
        self.playbacks.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

pub fn temp_storage_directory() -> PathBuf {
    std::env::temp_dir().join(format!("admin-notifier-it-{}", Uuid::new_v4()))
}

///
/// Polls the condition until it holds or the deadline passes.
///
pub async fn wait_for<F, Fut>(what: &str, condition: F)
where
    F: Fn() -> Fut,
    Fut: Future<Output = bool>,
{
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if condition().await {
            return;
        }
        sleep(Duration::from_millis(10)).await;
    }

    panic!("condition not reached in time: {what}");
}
