//! Core data models for contacts-cli
//!
//! This module contains the contact record and its validated field types.

pub mod birthday;
pub mod phone;
pub mod record;

pub use birthday::Birthday;
pub use phone::PhoneNumber;
pub use record::Record;
