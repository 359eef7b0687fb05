//! Phone number model
//!
//! Phone numbers are accepted with any punctuation and stored as exactly ten
//! ASCII digits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ContactsError, ContactsResult};

/// Number of digits a stored phone number must have
pub const PHONE_DIGITS: usize = 10;

/// A validated, normalized phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate raw input and normalize it to ten digits
    pub fn parse(raw: &str) -> ContactsResult<Self> {
        let digits = Self::normalize(raw);
        if digits.len() == PHONE_DIGITS {
            Ok(Self(digits))
        } else {
            Err(ContactsError::InvalidPhoneFormat)
        }
    }

    /// Strip every non-digit character
    pub fn normalize(raw: &str) -> String {
        raw.chars().filter(char::is_ascii_digit).collect()
    }

    /// The normalized digits
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = ContactsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ContactsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

impl PartialEq<str> for PhoneNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_is_stripped() {
        let phone = PhoneNumber::parse("(123) 456-7890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
        assert_eq!(phone.to_string(), "1234567890");
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(matches!(
            PhoneNumber::parse("12345"),
            Err(ContactsError::InvalidPhoneFormat)
        ));
        assert!(PhoneNumber::parse("123456789012").is_err());
        assert!(PhoneNumber::parse("").is_err());
    }

    #[test]
    fn test_letters_only_rejected() {
        assert!(PhoneNumber::parse("abc").is_err());
        // letters are stripped, leaving ten digits
        assert!(PhoneNumber::parse("tel:0501234567").is_ok());
    }

    #[test]
    fn test_non_ascii_digits_are_stripped() {
        // Arabic-Indic digits do not count toward the ten
        assert!(PhoneNumber::parse("١٢٣٤٥٦٧٨٩٠").is_err());
    }

    #[test]
    fn test_serde_validates() {
        let phone: PhoneNumber = serde_json::from_str("\"050-123-45-67\"").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"0501234567\"");

        assert!(serde_json::from_str::<PhoneNumber>("\"123\"").is_err());
    }
}
