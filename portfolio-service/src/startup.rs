use crate::config::PortfolioConfig;
use crate::handlers;
use crate::services::ContentStore;
use axum::{routing::get, Router};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: PortfolioConfig,
    pub content: ContentStore,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: PortfolioConfig) -> Result<Self, AppError> {
        let content = ContentStore::new(
            config.content.profile_path.clone(),
            config.content.diary_path.clone(),
        );

        let state = AppState {
            config: config.clone(),
            content,
        };

        let app = Router::new()
            .route("/", get(handlers::root))
            .route("/health", get(handlers::health_check))
            .route("/test", get(handlers::run_diagnostics))
            .route("/api/profile", get(handlers::get_profile))
            .route("/api/diary", get(handlers::list_diary))
            .route("/api/diary/:item_id", get(handlers::get_diary_item))
            .layer(TraceLayer::new_for_http())
            // Mirrored origin with credentials; a literal wildcard cannot be
            // combined with allow-credentials.
            .layer(CorsLayer::very_permissive())
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
