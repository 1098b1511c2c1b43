//! Ic value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

static IC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][0-9]{7}[A-Z]$").expect("Failed to compile IC regex"));

/// A national identification number, the unique key of a person.
///
/// Input is trimmed and upper-cased before validation, so `s1234567d` and
/// `S1234567D` produce equal values. Equality and hashing use the normalized
/// string.
///
/// # Example
///
/// ```
/// use address_book::domain::Ic;
///
/// let ic = Ic::new("s1234567d").unwrap();
/// assert_eq!(ic.as_str(), "S1234567D");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ic(String);

impl Ic {
    /// Create a new Ic, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Exactly nine characters after trimming
    /// - One letter, seven digits, one letter
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidIc` if the format is invalid.
    pub fn new(ic: impl Into<String>) -> Result<Self, ValidationError> {
        let ic = ic.into();
        let normalized = Self::normalize(&ic);

        if !IC_REGEX.is_match(&normalized) {
            return Err(ValidationError::InvalidIc(ic));
        }

        Ok(Self(normalized))
    }

    /// Returns true if `ic` would be accepted by [`Ic::new`].
    pub fn is_valid(ic: &str) -> bool {
        IC_REGEX.is_match(&Self::normalize(ic))
    }

    fn normalize(ic: &str) -> String {
        ic.trim().to_ascii_uppercase()
    }
}

string_value_object!(Ic);
