//! Service layer for contacts-cli
//!
//! The service layer provides the assistant's business operations on top of
//! the address book, handling lookups, validation and not-found reporting.

pub mod contact;

pub use contact::{AddContactReport, ContactService};
