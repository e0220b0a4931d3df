//! The address book collection.
//!
//! An insertion-ordered collection of validated contacts with lookup,
//! mutation, and aggregation operations. The collection itself enforces no
//! uniqueness; the duplicate policy is applied at insertion time.

use crate::domain::{FieldName, ValidationError};
use crate::error::{AddressBookError, BookResult};
use crate::models::{Contact, FieldUpdate};
use serde::{Deserialize, Serialize};

/// An ordered collection of contacts.
///
/// Contacts keep their insertion order through every operation; deletion
/// shifts later entries but never reorders them. The book owns its contacts
/// exclusively.
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Contact};
///
/// let mut book = AddressBook::new();
/// let contact = Contact::new(
///     "Alice", "Smith", "12 Oak Lane", "Austin", "Texas",
///     "733301", "9876543210", "alice@example.com",
/// )
/// .unwrap();
/// book.add_contact(contact).unwrap();
/// assert_eq!(book.contact_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    contacts: Vec<Contact>,
}

/// Outcome of a multi-field edit.
///
/// Each entry of the update map lands in exactly one bucket: applied,
/// failed validation, or skipped because the key names no contact field.
/// A failed entry never aborts the remaining ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Fields whose new value passed validation and was assigned.
    pub updated: Vec<FieldName>,

    /// Recognized fields whose new value failed validation, with the error.
    pub failed: Vec<(FieldName, ValidationError)>,

    /// Keys that name no contact field, left untouched.
    pub skipped: Vec<String>,
}

impl UpdateReport {
    /// Whether every entry was applied.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact, enforcing the duplicate policy.
    ///
    /// Two contacts are duplicates iff their first and last names both
    /// match exactly. Non-duplicates are appended, preserving insertion
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::DuplicateContact` if a contact with the
    /// same first and last name is already stored; the original entry is
    /// retained.
    pub fn add_contact(&mut self, contact: Contact) -> BookResult<()> {
        if self.contacts.iter().any(|c| c.same_person(&contact)) {
            tracing::warn!(name = %contact.full_name(), "rejected duplicate contact");
            return Err(AddressBookError::DuplicateContact(contact.full_name()));
        }

        tracing::debug!(name = %contact.full_name(), "added contact");
        self.contacts.push(contact);
        Ok(())
    }

    /// Find the first contact whose first or last name equals `name`.
    ///
    /// The match is exact and case-sensitive, in insertion order. Because a
    /// single name component is matched, distinct people sharing a name
    /// collide; the first-inserted one wins.
    pub fn find_contact(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.matches_name(name))
    }

    /// Update one field of the first contact matching `name`.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::NotFound` if no contact matches, or
    /// `AddressBookError::Validation` if the field name is unrecognized or
    /// the new value fails its rule. The contact is unchanged on failure.
    pub fn edit_contact(&mut self, name: &str, field: &str, value: &str) -> BookResult<FieldName> {
        let contact = self
            .contacts
            .iter_mut()
            .find(|c| c.matches_name(name))
            .ok_or_else(|| AddressBookError::NotFound(name.to_string()))?;

        let updated = contact.update_details(field, value)?;
        tracing::debug!(name, field = %updated, "edited contact");
        Ok(updated)
    }

    /// Apply a map of field updates to the first contact matching `name`.
    ///
    /// Entries are applied in iteration order. Keys that name no contact
    /// field are skipped; a value that fails validation is recorded and
    /// does not abort the remaining entries. Every entry is attempted
    /// regardless of earlier failures, and each applied field keeps its
    /// per-field atomicity.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::NotFound` if no contact matches `name`.
    /// Individual field failures are reported in the `UpdateReport`, not
    /// as errors.
    pub fn find_and_edit_contact<I, K, V>(&mut self, name: &str, updates: I) -> BookResult<UpdateReport>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let contact = self
            .contacts
            .iter_mut()
            .find(|c| c.matches_name(name))
            .ok_or_else(|| AddressBookError::NotFound(name.to_string()))?;

        let mut report = UpdateReport::default();
        for (key, value) in updates {
            let key = key.as_ref();
            let field: FieldName = match key.parse() {
                Ok(field) => field,
                Err(_) => {
                    report.skipped.push(key.to_string());
                    continue;
                }
            };
            match contact.apply(FieldUpdate::new(field, value)) {
                Ok(updated) => report.updated.push(updated),
                Err(err) => report.failed.push((field, err)),
            }
        }

        tracing::debug!(
            name,
            updated = report.updated.len(),
            failed = report.failed.len(),
            skipped = report.skipped.len(),
            "applied field updates"
        );
        Ok(report)
    }

    /// Remove and return the first contact matching `name`.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::NotFound` if no contact matches; the
    /// sequence is left untouched.
    pub fn delete_contact(&mut self, name: &str) -> BookResult<Contact> {
        let index = self
            .contacts
            .iter()
            .position(|c| c.matches_name(name))
            .ok_or_else(|| AddressBookError::NotFound(name.to_string()))?;

        let removed = self.contacts.remove(index);
        tracing::debug!(name = %removed.full_name(), "deleted contact");
        Ok(removed)
    }

    /// Number of stored contacts.
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterate over the contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// The stored contacts, in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// All contacts whose city equals `city` exactly, in insertion order.
    ///
    /// An empty result is a valid outcome, not an error.
    pub fn search_by_city(&self, city: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| c.city.as_str() == city)
            .collect()
    }

    /// All contacts whose state equals `state` exactly, in insertion order.
    pub fn search_by_state(&self, state: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| c.state.as_str() == state)
            .collect()
    }

    /// Group all contacts by city into an ordered mapping from city to the
    /// full names of its contacts.
    ///
    /// Keys appear in first-occurrence order; names within a group keep
    /// insertion order.
    pub fn group_by_city(&self) -> Vec<(String, Vec<String>)> {
        self.group_by(|c| c.city.as_str())
    }

    /// Group all contacts by state, like [`AddressBook::group_by_city`].
    pub fn group_by_state(&self) -> Vec<(String, Vec<String>)> {
        self.group_by(|c| c.state.as_str())
    }

    fn group_by<'a, F>(&'a self, key: F) -> Vec<(String, Vec<String>)>
    where
        F: Fn(&'a Contact) -> &'a str,
    {
        let mut groups: Vec<(String, Vec<String>)> = Vec::new();
        for contact in &self.contacts {
            let group_key = key(contact);
            match groups.iter_mut().find(|(k, _)| k == group_key) {
                Some((_, members)) => members.push(contact.full_name()),
                None => groups.push((group_key.to_string(), vec![contact.full_name()])),
            }
        }
        groups
    }

    /// Number of contacts whose city equals `city` exactly.
    pub fn count_by_city(&self, city: &str) -> usize {
        self.contacts.iter().filter(|c| c.city.as_str() == city).count()
    }

    /// Number of contacts whose state equals `state` exactly.
    pub fn count_by_state(&self, state: &str) -> usize {
        self.contacts
            .iter()
            .filter(|c| c.state.as_str() == state)
            .count()
    }

    /// The contacts sorted by first name, then last name.
    ///
    /// Sorted views never mutate the book; insertion order is preserved
    /// underneath. Ties keep insertion order (the sort is stable).
    pub fn sorted_by_name(&self) -> Vec<&Contact> {
        self.sorted_by(|a, b| {
            a.first_name
                .as_str()
                .cmp(b.first_name.as_str())
                .then_with(|| a.last_name.as_str().cmp(b.last_name.as_str()))
        })
    }

    /// The contacts sorted by city.
    pub fn sorted_by_city(&self) -> Vec<&Contact> {
        self.sorted_by(|a, b| a.city.as_str().cmp(b.city.as_str()))
    }

    /// The contacts sorted by state.
    pub fn sorted_by_state(&self) -> Vec<&Contact> {
        self.sorted_by(|a, b| a.state.as_str().cmp(b.state.as_str()))
    }

    /// The contacts sorted by zip code.
    pub fn sorted_by_zip(&self) -> Vec<&Contact> {
        self.sorted_by(|a, b| a.zip.as_str().cmp(b.zip.as_str()))
    }

    fn sorted_by<F>(&self, compare: F) -> Vec<&Contact>
    where
        F: FnMut(&&Contact, &&Contact) -> std::cmp::Ordering,
    {
        let mut sorted: Vec<&Contact> = self.contacts.iter().collect();
        sorted.sort_by(compare);
        sorted
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
