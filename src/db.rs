use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

const CREATE_GUESTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS guests (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    unique_id TEXT UNIQUE NOT NULL,
    name TEXT NOT NULL,
    qr_code TEXT NOT NULL,
    created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Open the pool and make sure the schema exists. There is no migration
/// story; the single table is created on first start.
pub async fn connect(database_url: &str) -> anyhow::Result<SqlitePool> {
    let opts = database_url
        .parse::<SqliteConnectOptions>()
        .context("parse DATABASE_URL")?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .context("connect to database")?;

    ensure_schema(&pool).await?;
    tracing::info!(database_url, "database ready");
    Ok(pool)
}

pub async fn ensure_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(CREATE_GUESTS_TABLE)
        .execute(pool)
        .await
        .context("create guests table")?;
    Ok(())
}
