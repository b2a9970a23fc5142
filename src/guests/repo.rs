use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;

/// One row of the `guests` table. Serialized as-is for the administrative
/// list view.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Guest {
    pub id: i64,
    pub unique_id: String,
    pub name: String,
    pub qr_code: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Guest {
    pub async fn insert(
        db: &SqlitePool,
        unique_id: &str,
        name: &str,
        qr_code: &str,
    ) -> sqlx::Result<Guest> {
        sqlx::query_as::<_, Guest>(
            r#"
            INSERT INTO guests (unique_id, name, qr_code)
            VALUES (?, ?, ?)
            RETURNING id, unique_id, name, qr_code, created_at
            "#,
        )
        .bind(unique_id)
        .bind(name)
        .bind(qr_code)
        .fetch_one(db)
        .await
    }

    pub async fn find_by_unique_id(
        db: &SqlitePool,
        unique_id: &str,
    ) -> sqlx::Result<Option<Guest>> {
        sqlx::query_as::<_, Guest>(
            r#"
            SELECT id, unique_id, name, qr_code, created_at
            FROM guests
            WHERE unique_id = ?
            "#,
        )
        .bind(unique_id)
        .fetch_optional(db)
        .await
    }

    /// Newest first; id breaks ties for rows created within the same second.
    pub async fn list_all(db: &SqlitePool) -> sqlx::Result<Vec<Guest>> {
        sqlx::query_as::<_, Guest>(
            r#"
            SELECT id, unique_id, name, qr_code, created_at
            FROM guests
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(db)
        .await
    }

    /// Returns the number of rows touched; zero means the guest is unknown.
    pub async fn update_name(
        db: &SqlitePool,
        unique_id: &str,
        name: &str,
    ) -> sqlx::Result<u64> {
        let result = sqlx::query("UPDATE guests SET name = ? WHERE unique_id = ?")
            .bind(name)
            .bind(unique_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(db: &SqlitePool, unique_id: &str) -> sqlx::Result<u64> {
        let result = sqlx::query("DELETE FROM guests WHERE unique_id = ?")
            .bind(unique_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }
}
