use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;

use crate::fixtures::EventFixture;
use crate::handlers::{health_check, list_user_events};

pub struct MockServer {
    fixture: Arc<EventFixture>,
}

/// A mock server running in the background on an ephemeral port.
pub struct RunningMockServer {
    addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
}

impl MockServer {
    pub async fn new() -> anyhow::Result<Self> {
        let fixture = Arc::new(EventFixture::create_test_fixture());
        Ok(Self { fixture })
    }

    pub async fn with_fixture(fixture: EventFixture) -> anyhow::Result<Self> {
        let fixture = Arc::new(fixture);
        Ok(Self { fixture })
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health_check))
            .route("/users/{username}/events", get(list_user_events))
            .layer(TraceLayer::new_for_http())
            .with_state(self.fixture.clone())
    }

    pub async fn serve(self, addr: &str) -> anyhow::Result<()> {
        let addr: SocketAddr = addr.parse()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Starting GitHub Mock Server on HTTP {}", listener.local_addr()?);
        axum::serve(listener, self.router())
            .await
            .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

        Ok(())
    }

    /// Bind to `127.0.0.1:0` and serve in a background task.
    pub async fn start(self) -> anyhow::Result<RunningMockServer> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let app = self.router();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await;
            if let Err(e) = result {
                tracing::error!("GitHub Mock Server error: {}", e);
            }
        });

        tracing::info!("GitHub Mock Server listening on {}", addr);
        Ok(RunningMockServer { addr, shutdown_tx })
    }

    pub fn get_fixture(&self) -> Arc<EventFixture> {
        self.fixture.clone()
    }
}

impl RunningMockServer {
    pub fn address(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn shutdown(self) {
        if self.shutdown_tx.send(()).is_err() {
            tracing::warn!("GitHub Mock Server already stopped");
        }
    }
}
