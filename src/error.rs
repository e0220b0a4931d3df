//! Error types for address book operations.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation errors live in [`crate::domain::errors`]; the types here
//! cover whole-collection operations.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on an address book.
///
/// "Duplicate" and "not found" are reported outcomes the caller matches on,
/// distinct from a field value failing validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A contact with the same first and last name is already stored
    #[error("Contact '{0}' already exists in the address book")]
    DuplicateContact(String),

    /// No stored contact has a matching first or last name
    #[error("Contact '{0}' not found")]
    NotFound(String),

    /// A field name or field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with AddressBookError
pub type BookResult<T> = Result<T, AddressBookError>;
