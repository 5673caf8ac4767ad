//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like
//! phone numbers and birthdays. These value objects provide validation
//! at construction time and prevent invalid data from being represented
//! in the system.

pub mod birthday;
pub mod errors;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use phone::PhoneNumber;
