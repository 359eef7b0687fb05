//! Address book
//!
//! An in-memory collection of contact records keyed by name. Iteration
//! follows insertion order; replacing an existing contact keeps its slot.

pub mod shared;
pub mod upcoming;

pub use shared::SharedAddressBook;
pub use upcoming::{UpcomingBirthday, DEFAULT_UPCOMING_DAYS};

use std::collections::HashMap;

use crate::error::{ContactsError, ContactsResult};
use crate::models::Record;

/// Keyed collection of contact records
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    data: HashMap<String, Record>,
    /// Index: insertion order of keys
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name
    ///
    /// Returns the replaced record.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let name = record.name().to_string();
        let previous = self.data.insert(name.clone(), record);
        if previous.is_none() {
            self.order.push(name);
        } else {
            tracing::debug!(contact = %name, "replaced existing contact");
        }
        previous
    }

    /// Insert a record, merging into an existing record with the same name
    pub fn merge_record(&mut self, record: Record) {
        match self.data.get_mut(record.name()) {
            Some(existing) => existing.merge(record),
            None => {
                self.add_record(record);
            }
        }
    }

    /// Insert a record supplied as untyped JSON
    ///
    /// Fails with [`ContactsError::TypeMismatch`] when the value does not
    /// describe a valid contact record.
    pub fn add_value(&mut self, value: serde_json::Value) -> ContactsResult<Option<Record>> {
        // serde also maps a sequence onto struct fields by position
        if !value.is_object() {
            return Err(ContactsError::TypeMismatch(format!(
                "expected an object, found {value}"
            )));
        }

        let record: Record = serde_json::from_value(value)
            .map_err(|e| ContactsError::TypeMismatch(e.to_string()))?;
        Ok(self.add_record(record))
    }

    /// Look up a record by exact name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.data.get(name)
    }

    /// Look up a record by exact name for mutation
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.data.get_mut(name)
    }

    /// Remove a record by name; absent names are ignored
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.data.remove(name)?;
        self.order.retain(|key| key != name);
        Some(removed)
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.data.get(name))
    }

    /// Contact names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl serde::Serialize for AddressBook {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
