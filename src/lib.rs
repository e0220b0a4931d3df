//! In-memory address book with validated contact records.
//!
//! This library stores structured person records, validates every field
//! against its format rule, and supports lookup, mutation, deletion, and
//! aggregation by location. Validation runs at construction and on every
//! field update, so a stored contact can never be in an invalid state.
//!
//! # Architecture
//!
//! - **domain**: Type-safe value objects for contact fields (names, address
//!   parts, zip, phone, email) and their validation errors
//! - **models**: The `Contact` record and its typed field-update dispatch
//! - **book**: The `AddressBook` collection with lookup, mutation, and
//!   aggregation operations
//! - **error**: Operation-level error types for precise error handling
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Contact};
//!
//! let mut book = AddressBook::new();
//! book.add_contact(Contact::new(
//!     "John", "Doe", "123 Main St", "New York", "NewYork",
//!     "123456", "+1-9876543210", "john.doe@example.com",
//! )?)?;
//!
//! book.edit_contact("John", "city", "Brooklyn")?;
//! assert_eq!(book.count_by_city("Brooklyn"), 1);
//! # Ok::<(), address_book::AddressBookError>(())
//! ```

// Re-export commonly used types
pub mod book;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, UpdateReport};
pub use domain::{
    AddressPart, EmailAddress, FieldName, PersonName, PhoneNumber, ValidationError, ZipCode,
};
pub use error::{AddressBookError, BookResult};
pub use models::{Contact, FieldUpdate};
