//! ZipCode value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static ZIP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]{5}$").expect("Failed to compile zip regex"));

/// A type-safe wrapper for postal zip codes.
///
/// This ensures that zip codes are validated at construction time. A zip
/// code is exactly six digits and the leading digit must be non-zero.
///
/// # Example
///
/// ```
/// use address_book::domain::ZipCode;
///
/// let zip = ZipCode::new("560034").unwrap();
/// assert_eq!(zip.as_str(), "560034");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    /// Create a new ZipCode, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidZip` if the value does not match
    /// `^[1-9][0-9]{5}$`.
    pub fn new(zip: impl Into<String>) -> Result<Self, ValidationError> {
        let zip = zip.into();

        if !ZIP_REGEX.is_match(&zip) {
            return Err(ValidationError::InvalidZip(zip));
        }

        Ok(Self(zip))
    }

    /// Get the zip code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for ZipCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ZipCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ZipCode::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
