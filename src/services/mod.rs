//! Service layer.
//!
//! Business logic that operates over the address book without owning it.

pub mod birthday;

pub use birthday::{upcoming_birthdays, UpcomingBirthday};
