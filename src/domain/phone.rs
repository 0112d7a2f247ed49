//! Phone value object.

use super::errors::ValidationError;
use super::field::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use ucd::{Codepoint, NumericType};

/// Number of digits a phone number must contain.
pub const PHONE_DIGITS: usize = 10;

/// Whether `c` counts as a digit: Unicode numeric type Decimal or Digit.
///
/// This covers ASCII `0-9`, other scripts' decimal digits (`١`, `٢`, ...)
/// and digit forms such as superscripts (`²`), but not fractions or
/// Roman numerals.
pub fn is_digit(c: char) -> bool {
    matches!(
        c.numeric_type(),
        Some(NumericType::Decimal) | Some(NumericType::Digit)
    )
}

/// A type-safe wrapper for phone numbers.
///
/// A phone number is valid when it contains exactly ten digits (see
/// [`is_digit`]) once every other character is ignored. The value is stored
/// exactly as given, formatting included; use [`Phone::digits_only`] for the
/// normalized form.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("123-456-7890").unwrap();
/// assert_eq!(phone.as_str(), "123-456-7890");
/// assert_eq!(phone.digits_only(), "1234567890");
/// assert!(Phone::new("123").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the digit count.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the value contains
    /// exactly ten digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Check whether `phone` would be accepted by [`Phone::new`].
    pub fn is_valid(phone: &str) -> bool {
        phone.chars().filter(|&c| is_digit(c)).count() == PHONE_DIGITS
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|&c| is_digit(c)).collect()
    }
}

impl Field for Phone {
    const LABEL: &'static str = "phone";

    fn value(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
