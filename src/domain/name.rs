//! Name value object.

use super::errors::ValidationError;

/// A person's name.
///
/// Names contain only alphanumeric characters and spaces, and must contain at
/// least one non-space character. Leading and trailing whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is blank or contains
    /// characters other than letters, digits and spaces.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Validate name format.
    pub fn is_valid(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_alphanumeric() => {}
            _ => return false,
        }
        chars.all(|c| c.is_alphanumeric() || c == ' ')
    }

    /// Iterate over the whitespace-separated words of the name.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

string_value_object!(Name);
