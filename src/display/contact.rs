//! Contact display formatting
//!
//! Formats records and upcoming birthdays for the assistant's output.

use crate::book::{AddressBook, UpcomingBirthday};
pub use crate::models::birthday::birthday_text;
use crate::models::{PhoneNumber, Record};

/// One line per contact, in book order
pub fn format_contact_list(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }

    book.iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `name: phone1; phone2`
pub fn format_contact_phones(record: &Record) -> String {
    let phones = record
        .phones()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join("; ");

    format!("{}: {}", record.name(), phones)
}

/// One `name: DD.MM.YYYY` line per upcoming birthday
pub fn format_upcoming_birthdays(upcoming: &[UpcomingBirthday], days: u32) -> String {
    if upcoming.is_empty() {
        return match days {
            7 => "No upcoming birthdays in the next week.".to_string(),
            1 => "No upcoming birthdays in the next day.".to_string(),
            n => format!("No upcoming birthdays in the next {} days.", n),
        };
    }

    upcoming
        .iter()
        .map(UpcomingBirthday::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
