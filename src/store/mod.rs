//! Squirrel Store module
//!
//! Persistence layer for squirrel records.
//! All writes are funneled through a single lock.

mod error;
mod repository;

pub use error::StoreError;
pub use repository::SquirrelStore;
