//! Contact model representing a person in the address book.

use crate::domain::{Birthday, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// The name is the unique key within an
/// [`AddressBook`](crate::book::AddressBook). Phone numbers and the
/// birthday are validated value objects, so a `Contact` never holds a
/// malformed phone or date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Display name, unique within an address book
    pub name: String,

    /// Phone numbers, in the order they were added
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<PhoneNumber>,

    /// Birthday, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Contact {
    /// Create a new contact with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Append a phone number to this contact.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Find a phone number by its digit string.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove a phone number by its digit string.
    ///
    /// Returns `true` if the number was present and removed.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        self.phones.len() != before
    }

    /// Replace `old` with `new`, keeping its position in the list.
    ///
    /// Returns `false` if `old` is not one of this contact's numbers.
    pub fn edit_phone(&mut self, old: &str, new: PhoneNumber) -> bool {
        match self.phones.iter().position(|p| p.as_str() == old) {
            Some(index) => {
                self.phones[index] = new;
                true
            }
            None => false,
        }
    }

    /// Set or replace the contact's birthday.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
