//! Tag value object.

use super::errors::ValidationError;

/// A single-word label attached to a person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    /// Create a new Tag.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTag` unless the tag is a non-empty
    /// run of alphanumeric characters.
    pub fn new(tag: impl Into<String>) -> Result<Self, ValidationError> {
        let tag = tag.into();
        if !Self::is_valid(&tag) {
            return Err(ValidationError::InvalidTag(tag));
        }
        Ok(Self(tag))
    }

    /// Validate tag format.
    pub fn is_valid(tag: &str) -> bool {
        !tag.is_empty() && tag.chars().all(|c| c.is_alphanumeric())
    }
}

string_value_object!(Tag);
