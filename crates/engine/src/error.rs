//! The module contains the errors the engine can throw.
//!
//! User input errors:
//!
//! - [`EmptyName`] thrown when a record is added without a name.
//! - [`DuplicateSerial`] thrown when the serial of a new record is taken.
//! - [`SerialNotFound`] thrown when deleting a serial that is not stored.
//!
//! Data integrity errors:
//!
//! - [`MalformedStore`] thrown when the backing file does not match the schema.
//!
//!  [`EmptyName`]: EngineError::EmptyName
//!  [`DuplicateSerial`]: EngineError::DuplicateSerial
//!  [`SerialNotFound`]: EngineError::SerialNotFound
//!  [`MalformedStore`]: EngineError::MalformedStore
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Student name is required")]
    EmptyName,
    #[error("Serial number {0} already exists. Records cannot be updated.")]
    DuplicateSerial(u32),
    #[error("Serial number {0} not found")]
    SerialNotFound(u32),
    #[error("Malformed store: {0}")]
    MalformedStore(String),
    #[error("Invalid class: {0}")]
    InvalidClass(String),
    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EmptyName, Self::EmptyName) => true,
            (Self::DuplicateSerial(a), Self::DuplicateSerial(b)) => a == b,
            (Self::SerialNotFound(a), Self::SerialNotFound(b)) => a == b,
            (Self::MalformedStore(a), Self::MalformedStore(b)) => a == b,
            (Self::InvalidClass(a), Self::InvalidClass(b)) => a == b,
            (Self::InvalidSortKey(a), Self::InvalidSortKey(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            (Self::Csv(a), Self::Csv(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
