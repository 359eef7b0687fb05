//! Contact record model
//!
//! A record owns one contact's name, phones and optional birthday. Field
//! validation failures are returned to the caller and never leave the record
//! half-modified.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::birthday::{birthday_text, Birthday};
use super::phone::PhoneNumber;
use crate::error::ContactsResult;

/// A single contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Contact name, also the address book key
    name: String,

    /// Phones in insertion order; duplicates are allowed
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    /// Optional birthday
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with a name only
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone
    pub fn add_phone(&mut self, raw: &str) -> ContactsResult<()> {
        let phone = PhoneNumber::parse(raw).inspect_err(|e| {
            tracing::debug!(contact = %self.name, input = raw, error = %e, "phone rejected");
        })?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone matching the normalized form of `raw`
    pub fn remove_phone(&mut self, raw: &str) {
        let normalized = PhoneNumber::normalize(raw);
        self.phones.retain(|p| p.as_str() != normalized);
    }

    /// Replace the first phone equal to `old` with a validated `new`
    ///
    /// Does nothing when no phone equals `old`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactsResult<()> {
        let Some(index) = self.phones.iter().position(|p| p == old) else {
            return Ok(());
        };

        let phone = PhoneNumber::parse(new).inspect_err(|e| {
            tracing::debug!(contact = %self.name, input = new, error = %e, "phone edit rejected");
        })?;
        self.phones[index] = phone;
        Ok(())
    }

    /// First phone exactly equal to `value`
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| *p == value)
    }

    /// Validate and set the birthday, replacing any existing one
    pub fn add_birthday(&mut self, raw: &str) -> ContactsResult<()> {
        let birthday = Birthday::parse(raw).inspect_err(|e| {
            tracing::debug!(contact = %self.name, input = raw, error = %e, "birthday rejected");
        })?;
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Clear the birthday
    pub fn remove_birthday(&mut self) -> Option<Birthday> {
        self.birthday.take()
    }

    /// Fold another record's fields into this one
    ///
    /// Phones are appended; the other birthday wins when it is set.
    pub fn merge(&mut self, other: Record) {
        self.phones.extend(other.phones);
        if other.birthday.is_some() {
            self.birthday = other.birthday;
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            "No phones".to_string()
        } else {
            self.phones
                .iter()
                .map(PhoneNumber::as_str)
                .collect::<Vec<_>>()
                .join("; ")
        };

        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            phones,
            birthday_text(self.birthday.as_ref())
        )
    }
}
