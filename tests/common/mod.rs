use async_trait::async_trait;
use mongodb::bson::Document;
use portfolio_backend::config::AppConfig;
use portfolio_backend::error::AppError;
use portfolio_backend::services::{DocumentStore, InMemoryStore};
use portfolio_backend::startup::Application;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub store: Option<Arc<InMemoryStore>>,
}

fn test_config(database_url: Option<String>) -> AppConfig {
    AppConfig {
        port: 0,
        database_url,
        database_name: "portfolio_test".to_string(),
        frontend_url: None,
        backend_url: None,
    }
}

impl TestApp {
    /// Spawns the app on a random port with an injected in-memory store.
    pub async fn spawn() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let app = Self::spawn_with(
            test_config(Some("mongodb://localhost:27017".to_string())),
            Some(store.clone()),
        )
        .await;
        TestApp {
            store: Some(store),
            ..app
        }
    }

    /// Spawns the app with no store handle at all (DATABASE_URL unset).
    pub async fn spawn_without_store() -> Self {
        Self::spawn_with(test_config(None), None).await
    }

    /// Spawns the app with an arbitrary store implementation.
    pub async fn spawn_failing(store: Arc<dyn DocumentStore>) -> Self {
        Self::spawn_with(
            test_config(Some("mongodb://localhost:27017".to_string())),
            Some(store),
        )
        .await
    }

    async fn spawn_with(config: AppConfig, store: Option<Arc<dyn DocumentStore>>) -> Self {
        let app = Application::build_with_store(config, store)
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept requests
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            store: None,
        }
    }
}

/// Store whose every operation fails, for exercising the 5xx paths.
pub struct FailingStore {
    pub error_message: String,
}

impl FailingStore {
    pub fn new(error_message: &str) -> Self {
        Self {
            error_message: error_message.to_string(),
        }
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn create_document(&self, _: &str, _: Document) -> Result<String, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(
            self.error_message.clone()
        )))
    }

    async fn list_collection_names(&self, _: usize) -> Result<Vec<String>, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(
            self.error_message.clone()
        )))
    }
}
