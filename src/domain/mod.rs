//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact fields: names,
//! street address parts, zip codes, phone numbers, and email addresses.
//! These value objects provide validation at construction time and prevent
//! invalid data from being represented in the system.

pub mod address;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;
pub mod zip;

pub use address::AddressPart;
pub use email::EmailAddress;
pub use errors::{FieldName, ValidationError};
pub use name::PersonName;
pub use phone::PhoneNumber;
pub use zip::ZipCode;
