//! Squirrel Server Library
//!
//! Re-exports modules for integration testing and the binaries.

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod store;

mod error;

pub use config::Config;
pub use domain::{NewSquirrel, RequestContext, Squirrel, SquirrelForm, ValidationError};
pub use error::{AppError, AppResult};
pub use store::{SquirrelStore, StoreError};
