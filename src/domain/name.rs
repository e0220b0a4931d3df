//! PersonName value object.

use super::errors::{FieldName, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z]{2,}$").expect("Failed to compile name regex"));

/// A type-safe wrapper for first and last names.
///
/// This ensures that names are validated at construction time. A name must
/// start with a capital letter and contain at least three letters in total,
/// with no digits or punctuation.
///
/// The same type covers both the first and the last name; the `FieldName`
/// passed to the constructor is only used to label validation errors.
///
/// # Example
///
/// ```
/// use address_book::domain::{FieldName, PersonName};
///
/// let name = PersonName::new(FieldName::FirstName, "John").unwrap();
/// assert_eq!(name.as_str(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` (labelled with `field`) if the
    /// name does not match `^[A-Z][a-zA-Z]{2,}$`.
    pub fn new(field: FieldName, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !NAME_REGEX.is_match(&name) {
            return Err(ValidationError::InvalidName { field, value: name });
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string. Deserialization happens at the
// Contact level, which knows which field the name belongs to.
impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = PersonName::new(FieldName::FirstName, "John").unwrap();
        assert_eq!(name.as_str(), "John");
    }

    #[test]
    fn test_name_validates_format() {
        assert!(PersonName::new(FieldName::FirstName, "Jo").is_err());
        assert!(PersonName::new(FieldName::FirstName, "jo").is_err());
        assert!(PersonName::new(FieldName::LastName, "doe").is_err());
        assert!(PersonName::new(FieldName::FirstName, "Al1ce").is_err());
        assert!(PersonName::new(FieldName::FirstName, "").is_err());
        assert!(PersonName::new(FieldName::FirstName, "Mary Jane").is_err());
        assert!(PersonName::new(FieldName::FirstName, "Ann").is_ok());
        assert!(PersonName::new(FieldName::LastName, "McDonald").is_ok());
    }

    #[test]
    fn test_name_error_carries_field() {
        let err = PersonName::new(FieldName::LastName, "doe").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidName {
                field: FieldName::LastName,
                value: "doe".to_string(),
            }
        );
    }

    #[test]
    fn test_name_display() {
        let name = PersonName::new(FieldName::LastName, "Doe").unwrap();
        assert_eq!(format!("{}", name), "Doe");
    }

    #[test]
    fn test_name_serialization() {
        let name = PersonName::new(FieldName::FirstName, "John").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"John\"");
    }
}
