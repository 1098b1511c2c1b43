//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Value-object validation errors live next to the value objects in
//! [`crate::domain::ValidationError`].

use crate::domain::Ic;
use thiserror::Error;

/// Errors raised by [`crate::models::AddressBook`] mutations.
///
/// A mutation that returns one of these leaves the address book unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// Another person already holds this IC
    #[error("Operation would result in duplicate persons (IC {0} is already in use)")]
    DuplicatePerson(Ic),

    /// No person with this IC is in the address book
    #[error("Person with IC {0} not found")]
    PersonNotFound(Ic),
}

/// A user-facing failure from executing a command.
///
/// The message is shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CommandError {
    message: String,
}

impl CommandError {
    /// Create a command error with the given user-facing message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message to show to the user.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<AddressBookError> for CommandError {
    fn from(err: AddressBookError) -> Self {
        Self::new(err.to_string())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with CommandError
pub type CommandOutcome<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
