//! AddressPart value object.

use super::errors::{FieldName, ValidationError};
use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum length for street address, city, and state values.
const MIN_LEN: usize = 4;

/// A type-safe wrapper for the free-text location fields: street address,
/// city, and state.
///
/// These fields carry no format restriction beyond a minimum length of four
/// characters. The `FieldName` passed to the constructor is only used to
/// label validation errors.
///
/// # Example
///
/// ```
/// use address_book::domain::{AddressPart, FieldName};
///
/// let city = AddressPart::new(FieldName::City, "New York").unwrap();
/// assert_eq!(city.as_str(), "New York");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressPart(String);

impl AddressPart {
    /// Create a new AddressPart, validating the minimum length.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TooShort` (labelled with `field`) if the
    /// value has fewer than four characters.
    pub fn new(field: FieldName, value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if value.chars().count() < MIN_LEN {
            return Err(ValidationError::TooShort { field, value });
        }

        Ok(Self(value))
    }

    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string. Deserialization happens at the
// Contact level, which knows which field the value belongs to.
impl Serialize for AddressPart {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for AddressPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
