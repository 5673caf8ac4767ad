//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a user command.
///
/// Every variant maps to a user-facing message; the REPL renders the
/// error's display string instead of aborting.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Command was given the wrong number of arguments
    #[error("{0}")]
    Usage(&'static str),

    /// No contact with the given name exists
    #[error("Contact '{0}' not found")]
    UnknownContact(String),

    /// The contact exists but does not have the given phone number
    #[error("Contact '{name}' has no phone number {phone}")]
    UnknownPhone { name: String, phone: String },

    /// The contact exists but has no recorded birthday
    #[error("No birthday recorded for '{0}'")]
    NoBirthday(String),

    /// A field failed domain validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
