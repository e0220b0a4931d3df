//! Contact model representing one person record in the address book.

use crate::domain::{
    AddressPart, EmailAddress, FieldName, PersonName, PhoneNumber, ValidationError, ZipCode,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A validated person record.
///
/// Every field is a domain value object, so a live `Contact` always
/// satisfies all field format rules. Construction validates the fields in a
/// fixed order and fails on the first violation; updates go through
/// [`Contact::apply`], which validates the new value before assigning it.
///
/// # Example
///
/// ```
/// use address_book::models::Contact;
///
/// let contact = Contact::new(
///     "John",
///     "Doe",
///     "123 Main St",
///     "New York",
///     "Texas",
///     "123456",
///     "+1-9876543210",
///     "john.doe@example.com",
/// )
/// .unwrap();
/// assert_eq!(contact.full_name(), "John Doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// First name
    pub first_name: PersonName,

    /// Last name
    pub last_name: PersonName,

    /// Street address
    pub address: AddressPart,

    /// City
    pub city: AddressPart,

    /// State
    pub state: AddressPart,

    /// Postal zip code
    pub zip: ZipCode,

    /// Phone number
    pub phone: PhoneNumber,

    /// Email address
    pub email: EmailAddress,
}

/// A proposed update to a single contact field.
///
/// Each variant carries the raw replacement value; validation happens when
/// the update is applied, not when it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    FirstName(String),
    LastName(String),
    Address(String),
    City(String),
    State(String),
    Zip(String),
    Phone(String),
    Email(String),
}

impl FieldUpdate {
    /// Build the update for `field` carrying `value`.
    pub fn new(field: FieldName, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            FieldName::FirstName => Self::FirstName(value),
            FieldName::LastName => Self::LastName(value),
            FieldName::Address => Self::Address(value),
            FieldName::City => Self::City(value),
            FieldName::State => Self::State(value),
            FieldName::Zip => Self::Zip(value),
            FieldName::Phone => Self::Phone(value),
            FieldName::Email => Self::Email(value),
        }
    }

    /// The field this update targets.
    pub fn field(&self) -> FieldName {
        match self {
            Self::FirstName(_) => FieldName::FirstName,
            Self::LastName(_) => FieldName::LastName,
            Self::Address(_) => FieldName::Address,
            Self::City(_) => FieldName::City,
            Self::State(_) => FieldName::State,
            Self::Zip(_) => FieldName::Zip,
            Self::Phone(_) => FieldName::Phone,
            Self::Email(_) => FieldName::Email,
        }
    }
}

impl Contact {
    /// Create a new Contact, validating every field.
    ///
    /// Fields are validated in declaration order (first name, last name,
    /// address, city, state, zip, phone, email) and validation stops at the
    /// first failure, so the returned error always names the first field
    /// that is invalid.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` of the first failing field. No
    /// partially-constructed contact is observable on failure.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: PersonName::new(FieldName::FirstName, first_name)?,
            last_name: PersonName::new(FieldName::LastName, last_name)?,
            address: AddressPart::new(FieldName::Address, address)?,
            city: AddressPart::new(FieldName::City, city)?,
            state: AddressPart::new(FieldName::State, state)?,
            zip: ZipCode::new(zip)?,
            phone: PhoneNumber::new(phone)?,
            email: EmailAddress::new(email)?,
        })
    }

    /// Apply a typed field update, validating the new value first.
    ///
    /// The update is atomic per field: on a validation failure the contact
    /// is left exactly as it was. Returns the field that was updated.
    ///
    /// # Errors
    ///
    /// Returns the new value's `ValidationError`; the caller is expected to
    /// treat this as a reported outcome rather than a fatal condition.
    pub fn apply(&mut self, update: FieldUpdate) -> Result<FieldName, ValidationError> {
        match update {
            FieldUpdate::FirstName(v) => {
                self.first_name = PersonName::new(FieldName::FirstName, v)?;
                Ok(FieldName::FirstName)
            }
            FieldUpdate::LastName(v) => {
                self.last_name = PersonName::new(FieldName::LastName, v)?;
                Ok(FieldName::LastName)
            }
            FieldUpdate::Address(v) => {
                self.address = AddressPart::new(FieldName::Address, v)?;
                Ok(FieldName::Address)
            }
            FieldUpdate::City(v) => {
                self.city = AddressPart::new(FieldName::City, v)?;
                Ok(FieldName::City)
            }
            FieldUpdate::State(v) => {
                self.state = AddressPart::new(FieldName::State, v)?;
                Ok(FieldName::State)
            }
            FieldUpdate::Zip(v) => {
                self.zip = ZipCode::new(v)?;
                Ok(FieldName::Zip)
            }
            FieldUpdate::Phone(v) => {
                self.phone = PhoneNumber::new(v)?;
                Ok(FieldName::Phone)
            }
            FieldUpdate::Email(v) => {
                self.email = EmailAddress::new(v)?;
                Ok(FieldName::Email)
            }
        }
    }

    /// Apply an update given by the external string field name.
    ///
    /// This is the string-keyed counterpart of [`Contact::apply`] for
    /// callers that carry field names as data (update maps, user input).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownField` if `field` is not one of the
    /// eight contact fields, or the new value's validation error. Either
    /// way the contact is unchanged.
    pub fn update_details(&mut self, field: &str, value: &str) -> Result<FieldName, ValidationError> {
        let field: FieldName = field.parse()?;
        self.apply(FieldUpdate::new(field, value))
    }

    /// The contact's full name, `"<first> <last>"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether `name` equals the first or the last name, case-sensitively.
    ///
    /// Matching a single name component is ambiguous by design: distinct
    /// people sharing a first or last name collide, and callers must not
    /// assume a unique match.
    pub fn matches_name(&self, name: &str) -> bool {
        self.first_name.as_str() == name || self.last_name.as_str() == name
    }

    /// Whether `other` names the same person (first and last name both
    /// equal, case-sensitively). This is the duplicate policy predicate.
    pub fn same_person(&self, other: &Contact) -> bool {
        self.first_name == other.first_name && self.last_name == other.last_name
    }

    /// Render the contact as a fixed-layout, human-readable block.
    ///
    /// Four labelled lines: name, combined address, phone, email. Pure
    /// formatting, no side effects.
    pub fn display_contact(&self) -> String {
        format!(
            "Name: {} {}\nAddress: {}, {}, {} - {}\nPhone: {}\nEmail: {}",
            self.first_name,
            self.last_name,
            self.address,
            self.city,
            self.state,
            self.zip,
            self.phone,
            self.email
        )
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_contact())
    }
}

// Serde support - deserialization re-runs full construction, so a JSON
// document with an invalid field fails to deserialize instead of producing
// an invalid contact.
impl<'de> Deserialize<'de> for Contact {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct RawContact {
            first_name: String,
            last_name: String,
            address: String,
            city: String,
            state: String,
            zip: String,
            phone: String,
            email: String,
        }

        let raw = RawContact::deserialize(deserializer)?;
        Contact::new(
            raw.first_name,
            raw.last_name,
            raw.address,
            raw.city,
            raw.state,
            raw.zip,
            raw.phone,
            raw.email,
        )
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_contact() -> Contact {
        Contact::new(
            "John",
            "Doe",
            "123 Main St",
            "New York",
            "Texas",
            "123456",
            "+1-9876543210",
            "john.doe@example.com",
        )
        .unwrap()
    }

    #[test]
    fn test_contact_new_valid() {
        let contact = sample_contact();
        assert_eq!(contact.first_name.as_str(), "John");
        assert_eq!(contact.last_name.as_str(), "Doe");
        assert_eq!(contact.zip.as_str(), "123456");
        assert_eq!(contact.full_name(), "John Doe");
    }

    #[test]
    fn test_contact_new_reports_first_failing_field() {
        // both the last name and the zip are invalid; the last name is
        // validated first and wins
        let err = Contact::new(
            "John",
            "doe",
            "123 Main St",
            "New York",
            "Texas",
            "012345",
            "9876543210",
            "john@example.com",
        )
        .unwrap_err();
        assert_eq!(err.field(), Some(FieldName::LastName));
    }

    #[test]
    fn test_contact_new_validation_order() {
        let err = Contact::new("jo", "do", "x", "y", "z", "0", "1", "bad").unwrap_err();
        assert_eq!(err.field(), Some(FieldName::FirstName));

        let err = Contact::new("John", "Doe", "x", "y", "z", "0", "1", "bad").unwrap_err();
        assert_eq!(err.field(), Some(FieldName::Address));
    }

    #[test]
    fn test_apply_updates_field() {
        let mut contact = sample_contact();
        let field = contact
            .apply(FieldUpdate::Phone("9123456780".to_string()))
            .unwrap();
        assert_eq!(field, FieldName::Phone);
        assert_eq!(contact.phone.as_str(), "9123456780");
    }

    #[test]
    fn test_apply_is_atomic_on_failure() {
        let mut contact = sample_contact();
        let before = contact.clone();

        let err = contact
            .apply(FieldUpdate::Zip("012345".to_string()))
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidZip("012345".to_string()));
        assert_eq!(contact, before);
    }

    #[test]
    fn test_update_details_dispatches_by_name() {
        let mut contact = sample_contact();
        contact.update_details("city", "Boston Metro").unwrap();
        assert_eq!(contact.city.as_str(), "Boston Metro");
    }

    #[test]
    fn test_update_details_unknown_field() {
        let mut contact = sample_contact();
        let before = contact.clone();

        let err = contact.update_details("nickname", "Johnny").unwrap_err();
        assert_eq!(err, ValidationError::UnknownField("nickname".to_string()));
        assert_eq!(contact, before);
    }

    #[test]
    fn test_matches_name_on_either_component() {
        let contact = sample_contact();
        assert!(contact.matches_name("John"));
        assert!(contact.matches_name("Doe"));
        assert!(!contact.matches_name("john"));
        assert!(!contact.matches_name("John Doe"));
    }

    #[test]
    fn test_same_person_requires_both_names() {
        let a = sample_contact();
        let mut b = sample_contact();
        assert!(a.same_person(&b));

        b.apply(FieldUpdate::LastName("Smith".to_string())).unwrap();
        assert!(!a.same_person(&b));
    }

    #[test]
    fn test_display_contact_layout() {
        let contact = sample_contact();
        assert_eq!(
            contact.display_contact(),
            "Name: John Doe\n\
             Address: 123 Main St, New York, Texas - 123456\n\
             Phone: +1-9876543210\n\
             Email: john.doe@example.com"
        );
    }

    #[test]
    fn test_display_reflects_updates() {
        let mut contact = sample_contact();
        contact.update_details("email", "jd@work.org").unwrap();
        assert!(contact.display_contact().ends_with("Email: jd@work.org"));
    }

    #[test]
    fn test_contact_serialization_uses_camel_case() {
        let contact = sample_contact();
        let json = serde_json::to_string(&contact).unwrap();
        assert!(json.contains("\"firstName\":\"John\""));
        assert!(json.contains("\"zip\":\"123456\""));
    }

    #[test]
    fn test_contact_round_trip() {
        let contact = sample_contact();
        let json = serde_json::to_string(&contact).unwrap();
        let back: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(back, contact);
    }

    #[test]
    fn test_contact_deserialization_revalidates() {
        let json = r#"{
            "firstName": "John",
            "lastName": "Doe",
            "address": "123 Main St",
            "city": "New York",
            "state": "Texas",
            "zip": "012345",
            "phone": "9876543210",
            "email": "john@example.com"
        }"#;
        let result: Result<Contact, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
