//! Upcoming birthday query
//!
//! Finds contacts whose birthday falls within a window starting at a
//! reference moment, moving weekend dates to the following Monday.
//!
//! The birthday's month and day are placed in the reference year at
//! midnight and compared against the reference timestamp, so the window is
//! `[reference_now, reference_now + days]` on the timeline. A birthday later
//! today is therefore only included when the reference is exactly midnight.
//! Weekend roll-forward happens after the window test; a Saturday birthday on
//! the last day of the window is reported on the Monday after it.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, Weekday};
use serde::Serialize;
use std::fmt;

use super::AddressBook;
use crate::models::birthday::BIRTHDAY_FORMAT;

/// Default window length in days
pub const DEFAULT_UPCOMING_DAYS: u32 = 7;

/// A contact to congratulate and the day to do it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Congratulation date as `DD.MM.YYYY`
    pub fn formatted_date(&self) -> String {
        self.congratulation_date.format(BIRTHDAY_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

fn serialize_date<S: serde::Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(BIRTHDAY_FORMAT))
}

/// Move Saturday and Sunday to the following Monday
pub fn roll_to_weekday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => {
            let days_to_monday = (7 - date.weekday().num_days_from_monday()) % 7;
            date + Duration::days(i64::from(days_to_monday))
        }
        _ => date,
    }
}

impl AddressBook {
    /// Contacts with a birthday in `[reference_now, reference_now + days]`
    ///
    /// Results follow the book's insertion order.
    pub fn upcoming_birthdays(
        &self,
        days: u32,
        reference_now: NaiveDateTime,
    ) -> Vec<UpcomingBirthday> {
        // windows past the end of the calendar are clamped to it
        let window_end = reference_now
            .checked_add_signed(Duration::days(i64::from(days)))
            .unwrap_or(NaiveDateTime::MAX);
        let year = reference_now.year();

        self.iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let Some(occurrence) = birthday.occurrence_in(year) else {
                    tracing::warn!(contact = record.name(), "birthday has no occurrence in {year}");
                    return None;
                };

                let occurrence_at = occurrence.and_time(chrono::NaiveTime::MIN);
                if occurrence_at < reference_now || occurrence_at > window_end {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: roll_to_weekday(occurrence),
                })
            })
            .collect()
    }

    /// Upcoming birthdays relative to the local clock
    pub fn upcoming_birthdays_from_now(&self, days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(days, Local::now().naive_local())
    }
}
