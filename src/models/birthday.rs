//! Birthday model
//!
//! Birthdays are entered and displayed as `DD.MM.YYYY`. The original text is
//! kept alongside the parsed date so it renders exactly as typed.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ContactsError, ContactsResult};

/// chrono format for `DD.MM.YYYY`
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A validated birthday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday {
    text: String,
    date: NaiveDate,
}

impl Birthday {
    /// Parse a `DD.MM.YYYY` string into a birthday
    pub fn parse(raw: &str) -> ContactsResult<Self> {
        if !has_birthday_shape(raw) {
            return Err(ContactsError::InvalidDateFormat);
        }

        let date = NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map_err(|_| ContactsError::InvalidDateFormat)?;

        Ok(Self {
            text: raw.to_string(),
            date,
        })
    }

    /// The text as originally entered
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The parsed calendar date
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// This birthday's month and day in the given year
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        self.date.with_year(year).or_else(|| {
            if self.date.month() == 2 && self.date.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

/// Birthday text, or "No birthday" when unset
pub fn birthday_text(birthday: Option<&Birthday>) -> &str {
    birthday.map_or("No birthday", Birthday::text)
}

/// Two digits, dot, two digits, dot, four digits
fn has_birthday_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Birthday {
    type Err = ContactsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Birthday {
    type Error = ContactsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let birthday = Birthday::parse("24.12.1990").unwrap();
        assert_eq!(birthday.text(), "24.12.1990");
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1990, 12, 24).unwrap()
        );
    }

    #[test]
    fn test_leap_years() {
        assert!(Birthday::parse("29.02.2020").is_ok());
        assert!(matches!(
            Birthday::parse("29.02.2021"),
            Err(ContactsError::InvalidDateFormat)
        ));
    }

    #[test]
    fn test_wrong_shape_rejected() {
        for raw in [
            "1990-12-24",
            "24/12/1990",
            "4.12.1990",
            "24.1.1990",
            "24.12.90",
            "24.12.19900",
            " 24.12.1990",
            "32.01.2000",
            "00.01.2000",
            "15.13.2000",
            "",
        ] {
            assert!(Birthday::parse(raw).is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn test_render_round_trip() {
        let birthday = Birthday::parse("01.03.1985").unwrap();
        let reparsed = Birthday::parse(&birthday.to_string()).unwrap();
        assert_eq!(birthday.date(), reparsed.date());
    }

    #[test]
    fn test_occurrence_in() {
        let birthday = Birthday::parse("24.12.1990").unwrap();
        assert_eq!(
            birthday.occurrence_in(2025),
            NaiveDate::from_ymd_opt(2025, 12, 24)
        );

        let leap = Birthday::parse("29.02.2000").unwrap();
        assert_eq!(leap.occurrence_in(2024), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(leap.occurrence_in(2025), NaiveDate::from_ymd_opt(2025, 2, 28));
    }

    #[test]
    fn test_serde_keeps_text() {
        let birthday = Birthday::parse("05.07.2001").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"05.07.2001\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
        assert!(serde_json::from_str::<Birthday>("\"2001-07-05\"").is_err());
    }
}
