//! contacts-cli - Terminal-based contact manager
//!
//! This library provides the core functionality for the contacts assistant:
//! validated phone numbers and birthdays, contact records, an in-memory
//! address book, and the upcoming-birthday query that moves weekend
//! birthdays to the following Monday.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Phone number, birthday and contact record
//! - `book`: The address book and its birthday query
//! - `services`: Business operations behind assistant commands
//! - `display`: Terminal formatting
//! - `cli`: Interactive assistant
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use contacts::book::AddressBook;
//! use contacts::models::Record;
//!
//! let mut record = Record::new("Anna");
//! record.add_phone("(050) 123-4567").unwrap();
//! record.add_birthday("24.12.1990").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(record);
//! assert_eq!(book.find("Anna").unwrap().phones()[0].as_str(), "0501234567");
//! ```

pub mod book;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use book::AddressBook;
pub use error::{ContactsError, ContactsResult};
pub use models::Record;
