//! Display formatting for terminal output
//!
//! Provides utilities for formatting contacts and birthday lists for
//! terminal display.

pub mod contact;

pub use contact::{
    birthday_text, format_contact_list, format_contact_phones, format_upcoming_birthdays,
};
