//! In-memory address book store.

use crate::models::Contact;
use crate::services::{upcoming_birthdays, UpcomingBirthday};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An in-memory collection of contacts keyed by their unique name.
///
/// Iteration follows insertion order, and so do the results of
/// [`upcoming_birthdays`](AddressBook::upcoming_birthdays). The book is
/// constructed once at process start and passed explicitly to whoever
/// needs it; there is no ambient global instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AddressBook {
    contacts: Vec<Contact>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a contact, replacing any existing contact with the same
    /// name in place (its position in iteration order is kept).
    pub fn add(&mut self, contact: Contact) {
        match self.position(&contact.name) {
            Some(index) => self.contacts[index] = contact,
            None => self.contacts.push(contact),
        }
    }

    /// Look up a contact by name.
    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.name == name)
    }

    /// Look up a contact by name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.name == name)
    }

    /// Remove a contact by name, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<Contact> {
        let index = self.position(name)?;
        Some(self.contacts.remove(index))
    }

    /// Number of contacts in the book.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterate over contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// Birthdays occurring within `days` days of the local calendar date.
    ///
    /// Convenience wrapper around
    /// [`services::upcoming_birthdays`](crate::services::upcoming_birthdays)
    /// that injects the system clock; tests call the underlying function
    /// with an explicit reference date instead.
    pub fn upcoming_birthdays(&self, days: i64) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(self.iter(), days, Local::now().date_naive())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.name == name)
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for contact in &self.contacts {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}", contact)?;
            first = false;
        }
        Ok(())
    }
}
