//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
///
/// Each variant carries the rejected input so the caller can echo it back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The IC is not one letter, seven digits and one letter.
    #[error("Invalid IC: {0}. ICs should be one letter, seven digits and one letter, e.g. S1234567D")]
    InvalidIc(String),

    /// The name is blank or contains non-alphanumeric characters.
    #[error("Invalid name: {0}. Names should only contain alphanumeric characters and spaces, and should not be blank")]
    InvalidName(String),

    /// The phone number is not at least three digits.
    #[error("Invalid phone number: {0}. Phone numbers should only contain digits and be at least 3 digits long")]
    InvalidPhone(String),

    /// The email address is malformed.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// The address is blank.
    #[error("Invalid address: addresses can take any value but should not be blank")]
    InvalidAddress,

    /// The tag is not a single alphanumeric word.
    #[error("Invalid tag: {0}. Tag names should be alphanumeric")]
    InvalidTag(String),
}
