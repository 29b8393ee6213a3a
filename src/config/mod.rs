use crate::error::AppError;
use config::{Config as Cfg, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    pub database_url: Option<String>,
    #[serde(default = "default_database_name")]
    pub database_name: String,
    pub frontend_url: Option<String>,
    pub backend_url: Option<String>,
}

fn default_port() -> u16 {
    8000
}

fn default_database_name() -> String {
    "portfolio".to_string()
}

impl AppConfig {
    /// Loads configuration from the environment (a `.env` file is honored
    /// when present). `DATABASE_URL` may be absent; the store handle then
    /// stays unavailable rather than failing startup.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(Environment::default())
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// CORS allow-list: the configured frontend/backend origins plus the
    /// fixed local-development ones. Empty only if both env URLs are unset
    /// and the dev origins were filtered out (they never are).
    pub fn allowed_origins(&self) -> Vec<String> {
        [
            self.frontend_url.as_deref(),
            self.backend_url.as_deref(),
            Some("http://localhost:3000"),
            Some("http://127.0.0.1:3000"),
            Some("https://localhost:3000"),
        ]
        .into_iter()
        .flatten()
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
    }
}
