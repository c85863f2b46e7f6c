//! Saved form state, one row per draft. The form is stored as JSON so drafts
//! can hold half-filled or invalid input.

use scribe::EpisodeForm;
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;

#[derive(Debug, Serialize, FromRow)]
pub struct Draft {
    pub id: String,
    pub form: Json<EpisodeForm>,
    pub updated_at: Option<i64>,
}

pub async fn create(pool: &DbPool, form: &EpisodeForm) -> Result<String, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    sqlx::query("INSERT INTO drafts (id, form, updated_at) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(Json(form))
        .bind(chrono::Utc::now().timestamp())
        .execute(pool)
        .await?;
    Ok(id)
}

pub async fn load(pool: &DbPool, id: &str) -> Result<Option<Draft>, sqlx::Error> {
    sqlx::query_as::<_, Draft>("SELECT id, form, updated_at FROM drafts WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert or overwrite the draft stored under `id`.
pub async fn save(pool: &DbPool, id: &str, form: &EpisodeForm) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO drafts (id, form, updated_at) VALUES (?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET form = excluded.form, updated_at = excluded.updated_at
        "#,
    )
    .bind(id)
    .bind(Json(form))
    .bind(chrono::Utc::now().timestamp())
    .execute(pool)
    .await?;
    Ok(())
}

/// Returns false when there was nothing to delete.
pub async fn delete(pool: &DbPool, id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM drafts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
