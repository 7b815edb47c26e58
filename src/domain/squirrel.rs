//! Squirrel records
//!
//! The persisted record plus the request shape it is built from.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// A persisted squirrel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Squirrel {
    /// Assigned by storage on creation, never reused
    pub id: i64,
    pub name: String,
    pub size: String,
}

/// Form-encoded request body for create and update
///
/// Fields stay optional here so that a missing key surfaces as a
/// [`ValidationError`] rather than a decoding failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SquirrelForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
}

impl SquirrelForm {
    /// Check required fields and produce a fully populated record
    pub fn validate(self) -> Result<NewSquirrel, ValidationError> {
        let name = required("name", self.name)?;
        let size = required("size", self.size)?;

        Ok(NewSquirrel { name, size })
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;

    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }

    // The urlencoded decoder substitutes U+FFFD for invalid UTF-8
    if value.contains(char::REPLACEMENT_CHARACTER) {
        return Err(ValidationError::InvalidEncoding(field));
    }

    Ok(value)
}

/// Validated squirrel contents, ready for storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSquirrel {
    pub name: String,
    pub size: String,
}

impl NewSquirrel {
    /// Build validated contents directly
    pub fn new(name: impl Into<String>, size: impl Into<String>) -> Result<Self, ValidationError> {
        SquirrelForm {
            name: Some(name.into()),
            size: Some(size.into()),
        }
        .validate()
    }

    /// Attach a storage-assigned id
    pub fn into_squirrel(self, id: i64) -> Squirrel {
        Squirrel {
            id,
            name: self.name,
            size: self.size,
        }
    }
}
