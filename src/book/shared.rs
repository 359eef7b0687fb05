//! Lock-guarded address book for concurrent hosts
//!
//! Each logical operation runs under a single exclusive lock.

use std::sync::{Arc, Mutex};

use super::AddressBook;
use crate::error::{ContactsError, ContactsResult};

/// Address book shared behind one mutex
#[derive(Debug, Clone, Default)]
pub struct SharedAddressBook {
    inner: Arc<Mutex<AddressBook>>,
}

impl SharedAddressBook {
    pub fn new(book: AddressBook) -> Self {
        Self {
            inner: Arc::new(Mutex::new(book)),
        }
    }

    /// Run a read operation under the lock
    pub fn with<T>(&self, f: impl FnOnce(&AddressBook) -> T) -> ContactsResult<T> {
        let book = self
            .inner
            .lock()
            .map_err(|e| ContactsError::Lock(format!("Failed to acquire lock: {}", e)))?;
        Ok(f(&book))
    }

    /// Run a mutating operation under the lock
    pub fn with_mut<T>(&self, f: impl FnOnce(&mut AddressBook) -> T) -> ContactsResult<T> {
        let mut book = self
            .inner
            .lock()
            .map_err(|e| ContactsError::Lock(format!("Failed to acquire lock: {}", e)))?;
        Ok(f(&mut book))
    }
}
