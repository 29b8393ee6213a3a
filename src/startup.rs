use crate::config::AppConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::{DocumentStore, MongoStore};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    /// `None` when DATABASE_URL is unset or client init failed; dependent
    /// handlers report unavailability instead of the process crashing.
    pub store: Option<Arc<dyn DocumentStore>>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: AppConfig) -> Result<Self, AppError> {
        let store: Option<Arc<dyn DocumentStore>> = match &config.database_url {
            Some(url) => match MongoStore::connect(url, &config.database_name).await {
                Ok(store) => Some(Arc::new(store)),
                Err(e) => {
                    tracing::warn!("Document store unavailable: {}", e);
                    None
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set; document store unavailable");
                None
            }
        };

        Self::build_with_store(config, store).await
    }

    /// Wires the router around an already-constructed store. Tests inject
    /// an in-memory store here.
    pub async fn build_with_store(
        config: AppConfig,
        store: Option<Arc<dyn DocumentStore>>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            store,
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/", get(handlers::root))
            .route("/test", get(handlers::test_database))
            .route("/contact", post(handlers::submit_contact))
            .layer(cors_layer(&config))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
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

// Explicit allow-list with credentials when any origin parses; otherwise a
// dev fallback of any-origin WITHOUT credentials (tower-http rejects the
// wildcard-plus-credentials combination, and rightly so).
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Skipping invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    }
}
