//! PhoneNumber value object.

use super::errors::ValidationError;

/// A type-safe wrapper for phone numbers.
///
/// Phone numbers are stored as a bare run of digits, at least three long.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("87438807").unwrap();
/// assert_eq!(phone.as_str(), "87438807");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    const MIN_DIGITS: usize = 3;

    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number contains anything
    /// other than digits or is shorter than three digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Validate phone format.
    pub fn is_valid(phone: &str) -> bool {
        phone.len() >= Self::MIN_DIGITS && phone.chars().all(|c| c.is_ascii_digit())
    }
}

string_value_object!(PhoneNumber);
