use crate::config::Config;
use crate::schema::{SystemParameter, TagRecord};
use crate::store::{ContentStore, StoreError};
use axum::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

const TABLES: [&str; 2] = ["system_parameter", "tag"];

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }

    /// Builds the pool without opening a connection; the first query
    /// (normally [`PgStore::migrate`]) establishes it.
    pub fn connect_lazy(config: &Config) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect_lazy(&config.database_url)?;

        Ok(PgStore::new(pool))
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!().run(&self.pool).await?;
        info!("Database migrations applied");
        Ok(())
    }
}

#[async_trait]
impl ContentStore for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        for table in TABLES {
            let exists: bool = sqlx::query_scalar("SELECT to_regclass($1) IS NOT NULL")
                .bind(table)
                .fetch_one(&self.pool)
                .await?;
            if !exists {
                return Err(StoreError::MissingTable(table));
            }
        }
        Ok(())
    }

    async fn system_parameters(&self) -> Result<Vec<SystemParameter>, StoreError> {
        let parameters = sqlx::query_as::<_, SystemParameter>(
            r#"SELECT
                p.key,
                p.value,
                p.category
            FROM system_parameter p
            ORDER BY p.category COLLATE "C" ASC, p.key COLLATE "C" ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(parameters)
    }

    async fn active_tags(&self, limit: i64) -> Result<Vec<TagRecord>, StoreError> {
        let tags = sqlx::query_as::<_, TagRecord>(
            r#"SELECT
                t.id,
                t.name,
                t.description,
                t.color,
                t.post_count
            FROM tag t
            WHERE t.is_active = true
            ORDER BY t.post_count DESC, t.name COLLATE "C" ASC
            LIMIT $1"#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(tags)
    }
}
