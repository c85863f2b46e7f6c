use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePool;
use sqlx::{Pool, Sqlite};
use std::env;

pub mod drafts;

pub type DbPool = Pool<Sqlite>;

pub async fn init_db() -> Result<DbPool, sqlx::Error> {
    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:scribe-booth.db".to_string());

    // Create database file if not exists
    if !Sqlite::database_exists(&database_url).await.unwrap_or(false) {
        Sqlite::create_database(&database_url).await?;
    }

    let pool = SqlitePool::connect(&database_url).await?;
    create_schema(&pool).await?;
    Ok(pool)
}

pub async fn create_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS drafts (
            id TEXT PRIMARY KEY,
            form TEXT NOT NULL,
            updated_at INTEGER
        );
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}
