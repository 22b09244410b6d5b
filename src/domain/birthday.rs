//! BirthdayDate value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format accepted and produced for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono's %Y also takes signed and short years
static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A calendar date of birth, parsed from `DD.MM.YYYY`.
///
/// There is no time component. Formatting always produces the zero padded
/// `DD.MM.YYYY` form, so a well-formed input string round-trips unchanged.
///
/// # Example
///
/// ```
/// use contact_book::domain::BirthdayDate;
///
/// let birthday = BirthdayDate::parse("07.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "07.03.1990");
/// assert!(BirthdayDate::parse("1990-03-07").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` for malformed strings and
    /// for dates that do not exist (e.g. `31.02.2000`).
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_REGEX.is_match(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))
    }

    /// Format as `DD.MM.YYYY`.
    pub fn format(&self) -> String {
        self.0.format(BIRTHDAY_FORMAT).to_string()
    }

    /// The first anniversary of this birthday falling on or after `today`.
    ///
    /// A 29 February birthday is celebrated on 28 February in non-leap
    /// years. Returns `None` only when the anniversary would fall outside
    /// the representable date range.
    pub fn next_anniversary(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.anniversary_in(today.year())?;
        if this_year >= today {
            return Some(this_year);
        }
        self.anniversary_in(today.year().checked_add(1)?)
    }

    /// Whole days from `today` until the next anniversary.
    pub fn days_until_next(&self, today: NaiveDate) -> Option<i64> {
        self.next_anniversary(today)
            .map(|anniversary| (anniversary - today).num_days())
    }

    fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
            if month == 2 && day == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

impl Serialize for BirthdayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.format().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BirthdayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthdayDate::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_round_trips() {
        for value in ["01.01.2000", "29.02.1996", "31.12.1999", "15.06.1987"] {
            let birthday = BirthdayDate::parse(value).unwrap();
            assert_eq!(birthday.format(), value);
        }
    }

    #[test]
    fn test_birthday_rejects_malformed() {
        assert!(BirthdayDate::parse("").is_err());
        assert!(BirthdayDate::parse("1990-01-01").is_err());
        assert!(BirthdayDate::parse("01/01/1990").is_err());
        assert!(BirthdayDate::parse("32.01.1990").is_err());
        assert!(BirthdayDate::parse("29.02.1991").is_err());
        assert!(BirthdayDate::parse("01.13.1990").is_err());
        assert!(BirthdayDate::parse("01.01.1990 12:00").is_err());
        assert!(BirthdayDate::parse("01.02.90").is_err());
        assert!(BirthdayDate::parse("01.02.+1990").is_err());
        assert!(BirthdayDate::parse("01.02.-001").is_err());
        assert!(BirthdayDate::parse("1.2.1990").is_err());
        assert!(BirthdayDate::parse("01.02.19900").is_err());
    }

    #[test]
    fn test_birthday_error_carries_input() {
        let err = BirthdayDate::parse("tomorrow").unwrap_err();
        assert_eq!(err, ValidationError::InvalidBirthday("tomorrow".to_string()));
    }

    #[test]
    fn test_next_anniversary_later_this_year() {
        let birthday = BirthdayDate::parse("20.10.1985").unwrap();
        let today = date(2026, 10, 18);
        assert_eq!(birthday.next_anniversary(today), Some(date(2026, 10, 20)));
        assert_eq!(birthday.days_until_next(today), Some(2));
    }

    #[test]
    fn test_next_anniversary_today() {
        let birthday = BirthdayDate::parse("18.10.1985").unwrap();
        let today = date(2026, 10, 18);
        assert_eq!(birthday.days_until_next(today), Some(0));
    }

    #[test]
    fn test_next_anniversary_wraps_to_next_year() {
        let birthday = BirthdayDate::parse("02.01.1970").unwrap();
        let today = date(2026, 12, 28);
        assert_eq!(birthday.next_anniversary(today), Some(date(2027, 1, 2)));
        assert_eq!(birthday.days_until_next(today), Some(5));
    }

    #[test]
    fn test_leap_day_in_common_year() {
        let birthday = BirthdayDate::parse("29.02.2000").unwrap();
        assert_eq!(
            birthday.next_anniversary(date(2027, 2, 20)),
            Some(date(2027, 2, 28))
        );
        assert_eq!(
            birthday.next_anniversary(date(2028, 2, 20)),
            Some(date(2028, 2, 29))
        );
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = BirthdayDate::parse("05.11.1992").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"05.11.1992\"");

        let back: BirthdayDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<BirthdayDate, _> = serde_json::from_str("\"1992-11-05\"");
        assert!(result.is_err());
    }
}
