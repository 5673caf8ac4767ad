//! Contact Assistant - A command-line address-book assistant.
//!
//! This library stores contacts (name, phone numbers, optional birthday)
//! in an in-memory address book, exposes a small REPL command loop, and
//! reports birthdays occurring within an upcoming window, rolling
//! weekend dates forward to the next Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for phone numbers and birthdays
//! - **models**: The contact record
//! - **book**: The in-memory address book store
//! - **services**: The upcoming-birthday calculator
//! - **commands**: User command parsing and handlers
//! - **repl**: The interactive command loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod services;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{CommandError, CommandResult, ConfigError, ConfigResult};
pub use models::Contact;
pub use services::{upcoming_birthdays, UpcomingBirthday};
