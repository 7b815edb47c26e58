//! Squirrel Store Repository
//!
//! CRUD over the `squirrels` table.

use std::sync::Arc;

use sqlx::SqlitePool;
use tokio::sync::Mutex;

use crate::domain::{NewSquirrel, Squirrel};

use super::StoreError;

/// Store for persisting and retrieving squirrels
///
/// Cloning is cheap; clones share the pool and the write lock, so id
/// assignment and mutations stay serialized across every handle.
#[derive(Debug, Clone)]
pub struct SquirrelStore {
    pool: SqlitePool,
    write_lock: Arc<Mutex<()>>,
}

impl SquirrelStore {
    /// Create a new SquirrelStore with a database pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// All squirrels, oldest first
    pub async fn list(&self) -> Result<Vec<Squirrel>, StoreError> {
        let squirrels = sqlx::query_as::<_, Squirrel>(
            "SELECT id, name, size FROM squirrels ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(squirrels)
    }

    /// Look up a single squirrel
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Squirrel>, StoreError> {
        let squirrel = sqlx::query_as::<_, Squirrel>(
            "SELECT id, name, size FROM squirrels WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(squirrel)
    }

    /// Persist a new squirrel and return it with its assigned id
    pub async fn create(&self, squirrel: NewSquirrel) -> Result<Squirrel, StoreError> {
        let _guard = self.write_lock.lock().await;

        let id = sqlx::query("INSERT INTO squirrels (name, size) VALUES (?, ?)")
            .bind(&squirrel.name)
            .bind(&squirrel.size)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        tracing::debug!(id, name = %squirrel.name, size = %squirrel.size, "Squirrel created");

        Ok(squirrel.into_squirrel(id))
    }

    /// Replace name and size of an existing squirrel
    ///
    /// Returns `None` without writing anything when no squirrel has `id`.
    pub async fn update_by_id(
        &self,
        id: i64,
        squirrel: NewSquirrel,
    ) -> Result<Option<Squirrel>, StoreError> {
        let _guard = self.write_lock.lock().await;

        let rows = sqlx::query("UPDATE squirrels SET name = ?, size = ? WHERE id = ?")
            .bind(&squirrel.name)
            .bind(&squirrel.size)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows == 0 {
            tracing::debug!(id, "Update skipped, squirrel not found");
            return Ok(None);
        }

        tracing::debug!(id, name = %squirrel.name, size = %squirrel.size, "Squirrel updated");

        Ok(Some(squirrel.into_squirrel(id)))
    }

    /// Remove a squirrel permanently
    ///
    /// Returns `false` when no squirrel has `id`.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;

        let rows = sqlx::query("DELETE FROM squirrels WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::debug!(id, deleted = rows > 0, "Squirrel delete");

        Ok(rows > 0)
    }
}
