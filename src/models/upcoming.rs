//! Rows returned by the birthday-window query.

use crate::domain::ContactName;
use chrono::NaiveDate;

/// A contact whose birthday falls inside the lookahead window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// The contact's name
    pub name: ContactName,

    /// The next anniversary of the contact's birthday
    pub date: NaiveDate,

    /// Days from the reference date until `date` (0 means today)
    pub days_until: i64,
}
