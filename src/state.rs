use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::db;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = db::connect(&config.database_url).await?;
        Ok(Self { db, config })
    }
}

#[cfg(test)]
impl AppState {
    /// State backed by a fresh in-memory database. The pool is capped at one
    /// connection; each in-memory connection would otherwise see its own
    /// empty database.
    pub(crate) async fn in_memory() -> Self {
        use crate::config::UrlConfig;

        let db = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        db::ensure_schema(&db).await.expect("schema");

        let config = Arc::new(AppConfig {
            database_url: "sqlite::memory:".into(),
            urls: UrlConfig {
                checkin_base: "https://checkin.test".into(),
                invitation_base: "https://invite.test".into(),
            },
        });

        Self { db, config }
    }
}
