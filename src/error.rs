//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when working with records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A name or phone failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone is not on the record
    #[error("Phone {0} not found")]
    PhoneNotFound(String),

    /// No contact with this name exists in the book
    #[error("Contact {0} not found")]
    ContactNotFound(String),
}

impl ContactError {
    /// Whether this is one of the "not found" errors.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PhoneNotFound(_) | Self::ContactNotFound(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while running an assistant command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command was given too few arguments
    #[error("Not enough arguments. Usage: {usage}")]
    MissingArguments { usage: &'static str },

    /// The underlying contact operation failed
    #[error(transparent)]
    Contact(#[from] ContactError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Contact(ContactError::Validation(err))
    }
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
