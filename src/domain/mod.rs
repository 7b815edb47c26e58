//! Domain module
//!
//! Squirrel records, request validation and per-request context.

pub mod context;
pub mod error;
pub mod squirrel;

pub use context::RequestContext;
pub use error::ValidationError;
pub use squirrel::{NewSquirrel, Squirrel, SquirrelForm};
