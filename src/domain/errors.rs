//! Domain validation errors and field identifiers.

use std::fmt;
use std::str::FromStr;

/// Identifies one of the eight contact fields.
///
/// Used for typed update dispatch and for error reporting. The `Display` and
/// `FromStr` spellings are the external camelCase names (`firstName`,
/// `lastName`, ...) that string-keyed update maps use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Address,
    City,
    State,
    Zip,
    Phone,
    Email,
}

impl FieldName {
    /// All fields, in validation order.
    pub const ALL: [FieldName; 8] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Address,
        FieldName::City,
        FieldName::State,
        FieldName::Zip,
        FieldName::Phone,
        FieldName::Email,
    ];

    /// Get the external camelCase spelling of the field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firstName" => Ok(Self::FirstName),
            "lastName" => Ok(Self::LastName),
            "address" => Ok(Self::Address),
            "city" => Ok(Self::City),
            "state" => Ok(Self::State),
            "zip" => Ok(Self::Zip),
            "phone" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }
}

/// Errors that can occur during contact field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A name field does not start with a capital letter followed by at
    /// least two more letters.
    InvalidName { field: FieldName, value: String },

    /// A free-text location field is shorter than the required minimum.
    TooShort { field: FieldName, value: String },

    /// The zip code is not six digits with a non-zero leading digit.
    InvalidZip(String),

    /// The phone number is not ten digits with an optional country prefix.
    InvalidPhone(String),

    /// The email address is not of the `local@domain.tld` shape.
    InvalidEmail(String),

    /// The field name does not identify any contact field.
    UnknownField(String),
}

impl ValidationError {
    /// The field the error refers to, if it names a known field.
    pub fn field(&self) -> Option<FieldName> {
        match self {
            Self::InvalidName { field, .. } | Self::TooShort { field, .. } => Some(*field),
            Self::InvalidZip(_) => Some(FieldName::Zip),
            Self::InvalidPhone(_) => Some(FieldName::Phone),
            Self::InvalidEmail(_) => Some(FieldName::Email),
            Self::UnknownField(_) => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName { field, value } => write!(
                f,
                "Invalid {}: '{}' must start with a capital letter and contain at least 3 letters",
                field, value
            ),
            Self::TooShort { field, value } => write!(
                f,
                "Invalid {}: '{}' must be at least 4 characters long",
                field, value
            ),
            Self::InvalidZip(value) => write!(
                f,
                "Invalid zip: '{}' must be exactly 6 digits and must not start with 0",
                value
            ),
            Self::InvalidPhone(value) => write!(
                f,
                "Invalid phone number: '{}' must be 10 digits with an optional country code",
                value
            ),
            Self::InvalidEmail(value) => write!(f, "Invalid email address: {}", value),
            Self::UnknownField(name) => write!(f, "Invalid field name: {}", name),
        }
    }
}

impl std::error::Error for ValidationError {}
