//! Custom error types for contacts-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for contacts-cli operations
#[derive(Error, Debug)]
pub enum ContactsError {
    /// Phone number did not normalize to exactly ten digits
    #[error("Phone number must be exactly 10 digits")]
    InvalidPhoneFormat,

    /// Birthday text did not match DD.MM.YYYY or is not a real date
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDateFormat,

    /// A value that is not a contact record was offered to the address book
    #[error("Value must be a contact record: {0}")]
    TypeMismatch(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Shared address book lock was poisoned
    #[error("Lock error: {0}")]
    Lock(String),
}

impl ContactsError {
    /// Create a "not found" error for contacts
    pub fn contact_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a field validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidPhoneFormat | Self::InvalidDateFormat)
    }
}

impl From<std::io::Error> for ContactsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContactsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for contacts-cli operations
pub type ContactsResult<T> = Result<T, ContactsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ContactsError::InvalidPhoneFormat.to_string(),
            "Phone number must be exactly 10 digits"
        );
        assert_eq!(
            ContactsError::InvalidDateFormat.to_string(),
            "Invalid date format. Use DD.MM.YYYY"
        );
        assert!(ContactsError::InvalidPhoneFormat.is_validation());
        assert!(!ContactsError::Config("x".into()).is_validation());
    }

    #[test]
    fn test_not_found_error() {
        let err = ContactsError::contact_not_found("Anna");
        assert_eq!(err.to_string(), "Contact not found: Anna");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ContactsError = io_err.into();
        assert!(matches!(err, ContactsError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ContactsError = json_err.into();
        assert!(matches!(err, ContactsError::Json(_)));
    }
}
