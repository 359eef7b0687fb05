//! Contact service
//!
//! Business operations behind the assistant commands: find-or-create on add,
//! phone changes, birthdays and import/export.

use chrono::NaiveDateTime;

use crate::book::{AddressBook, UpcomingBirthday};
use crate::error::{ContactsError, ContactsResult};
use crate::models::{Birthday, Record};

/// Outcome of adding a contact
#[derive(Debug)]
pub struct AddContactReport {
    /// Whether a new record was created
    pub created: bool,
    /// Validation error for the supplied phone, if it was rejected
    pub phone_error: Option<ContactsError>,
}

/// Service for contact management
pub struct ContactService<'a> {
    book: &'a mut AddressBook,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service
    pub fn new(book: &'a mut AddressBook) -> Self {
        Self { book }
    }

    /// Add a contact, or add a phone to an existing one
    ///
    /// The contact is kept even when the phone is rejected.
    pub fn add_contact(&mut self, name: &str, phone: Option<&str>) -> AddContactReport {
        let created = self.book.find(name).is_none();
        if created {
            self.book.add_record(Record::new(name));
            tracing::info!(contact = name, "contact created");
        }

        let phone_error = match (phone, self.book.find_mut(name)) {
            (Some(raw), Some(record)) => record.add_phone(raw).err(),
            _ => None,
        };

        AddContactReport {
            created,
            phone_error,
        }
    }

    /// Get a contact by name
    pub fn get(&self, name: &str) -> ContactsResult<&Record> {
        self.book
            .find(name)
            .ok_or_else(|| ContactsError::contact_not_found(name))
    }

    /// Replace one of a contact's phones
    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> ContactsResult<()> {
        self.record_mut(name)?.edit_phone(old, new)
    }

    /// Remove a phone from a contact
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> ContactsResult<()> {
        self.record_mut(name)?.remove_phone(phone);
        Ok(())
    }

    /// Set a contact's birthday
    pub fn set_birthday(&mut self, name: &str, raw: &str) -> ContactsResult<()> {
        self.record_mut(name)?.add_birthday(raw)
    }

    /// A contact's birthday, if the contact exists and has one
    pub fn birthday(&self, name: &str) -> Option<&Birthday> {
        self.book.find(name).and_then(Record::birthday)
    }

    /// Delete a contact
    pub fn delete(&mut self, name: &str) -> ContactsResult<Record> {
        let record = self
            .book
            .delete(name)
            .ok_or_else(|| ContactsError::contact_not_found(name))?;
        tracing::info!(contact = name, "contact deleted");
        Ok(record)
    }

    /// Birthdays in the next `days` days from `now`
    pub fn upcoming_birthdays(&self, days: u32, now: NaiveDateTime) -> Vec<UpcomingBirthday> {
        self.book.upcoming_birthdays(days, now)
    }

    /// Add a contact described as a JSON object
    ///
    /// Returns true when an existing contact was replaced.
    pub fn import_json(&mut self, json: &str) -> ContactsResult<bool> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let replaced = self.book.add_value(value)?;
        Ok(replaced.is_some())
    }

    /// The whole book as pretty JSON
    pub fn export_json(&self) -> ContactsResult<String> {
        Ok(serde_json::to_string_pretty(&*self.book)?)
    }

    fn record_mut(&mut self, name: &str) -> ContactsResult<&mut Record> {
        self.book
            .find_mut(name)
            .ok_or_else(|| ContactsError::contact_not_found(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_add_contact_creates_then_updates() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);

        let first = service.add_contact("Anna", Some("1111111111"));
        assert!(first.created);
        assert!(first.phone_error.is_none());

        let second = service.add_contact("Anna", Some("2222222222"));
        assert!(!second.created);

        assert_eq!(service.get("Anna").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_contact_keeps_record_on_bad_phone() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);

        let report = service.add_contact("Anna", Some("abc"));
        assert!(report.created);
        assert!(matches!(
            report.phone_error,
            Some(ContactsError::InvalidPhoneFormat)
        ));
        assert!(service.get("Anna").unwrap().phones().is_empty());
    }

    #[test]
    fn test_change_phone() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);
        service.add_contact("Anna", Some("1111111111"));

        service.change_phone("Anna", "1111111111", "2222222222").unwrap();
        assert_eq!(service.get("Anna").unwrap().phones()[0].as_str(), "2222222222");

        let err = service.change_phone("Bob", "1", "2").unwrap_err();
        assert!(err.is_not_found());

        let err = service.change_phone("Anna", "2222222222", "3").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_remove_phone() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);
        service.add_contact("Anna", Some("1111111111"));

        service.remove_phone("Anna", "111 111 1111").unwrap();
        assert!(service.get("Anna").unwrap().phones().is_empty());
    }

    #[test]
    fn test_birthdays() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);
        service.add_contact("Anna", None);

        assert!(service.birthday("Anna").is_none());
        service.set_birthday("Anna", "24.12.1990").unwrap();
        assert_eq!(service.birthday("Anna").unwrap().text(), "24.12.1990");
        assert!(service.set_birthday("Bob", "24.12.1990").unwrap_err().is_not_found());

        let now = NaiveDate::from_ymd_opt(2025, 12, 20)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let upcoming = service.upcoming_birthdays(7, now);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].formatted_date(), "24.12.2025");
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);
        service.add_contact("Anna", None);

        assert_eq!(service.delete("Anna").unwrap().name(), "Anna");
        assert!(service.delete("Anna").unwrap_err().is_not_found());
    }

    #[test]
    fn test_import_and_export() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);

        let replaced = service
            .import_json(r#"{"name": "Anna", "phones": ["1111111111"]}"#)
            .unwrap();
        assert!(!replaced);

        let err = service.import_json(r#"["Anna"]"#).unwrap_err();
        assert!(matches!(err, ContactsError::TypeMismatch(_)));

        let err = service.import_json("not json").unwrap_err();
        assert!(matches!(err, ContactsError::Json(_)));

        let exported = service.export_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&exported).unwrap();
        assert_eq!(value[0]["name"], "Anna");
        assert_eq!(value[0]["phones"][0], "1111111111");
    }
}
