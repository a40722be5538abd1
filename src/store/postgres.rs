use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::models::ContactMessage;

use super::{Store, StoreError};

pub struct PgStore {
    pool: PgPool,
    name: Option<String>,
}

impl PgStore {
    /// Build a store handle without touching the network. The pool connects
    /// on first use, so a configured-but-unreachable database still yields a
    /// handle; its errors surface per-operation and are degraded there.
    pub fn connect(database_url: &str, name: Option<String>) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy(database_url)?;

        Ok(PgStore { pool, name })
    }

    /// Create the contact table if missing. Called once at startup,
    /// best-effort: the server runs regardless of the outcome.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS contact_messages (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                message TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl Store for PgStore {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    async fn insert_contact(&self, message: &ContactMessage) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO contact_messages (id, name, email, message, created_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(message.id)
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message)
        .bind(message.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT tablename FROM pg_catalog.pg_tables
             WHERE schemaname = 'public' ORDER BY tablename",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }
}
