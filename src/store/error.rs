//! Store Errors
//!
//! Error types for store operations. An absent record is not an error;
//! operations report it through their return value.

/// Errors that can occur in the squirrel store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Check if the underlying database reported contention
    pub fn is_busy(&self) -> bool {
        match self {
            StoreError::Database(sqlx::Error::Database(db_err)) => {
                // Primary result code of SQLITE_BUSY / SQLITE_LOCKED
                db_err
                    .code()
                    .and_then(|code| code.parse::<i32>().ok())
                    .map_or(false, |code| matches!(code & 0xff, 5 | 6))
            }
            StoreError::Database(sqlx::Error::PoolTimedOut) => true,
            _ => false,
        }
    }
}
