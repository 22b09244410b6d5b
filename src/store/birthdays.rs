//! Birthday-window queries over the store.

use super::ContactStore;
use crate::domain::ContactName;
use crate::models::UpcomingBirthday;
use chrono::{Local, NaiveDate};

/// Lookahead used by [`ContactStore::upcoming_birthdays`], in days.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

impl ContactStore {
    /// Names of contacts whose birthday is within the next seven days,
    /// counting from today's local date (inclusive on both ends).
    pub fn upcoming_birthdays(&self) -> Vec<ContactName> {
        let today = Local::now().date_naive();
        self.upcoming_birthdays_from(today, DEFAULT_BIRTHDAY_WINDOW_DAYS)
            .into_iter()
            .map(|upcoming| upcoming.name)
            .collect()
    }

    /// Contacts whose next birthday anniversary falls in
    /// `today..=today + window_days`.
    ///
    /// Only the calendar date is compared. Birthdays that already passed
    /// this year count towards next year's anniversary, so a past date is
    /// never reported. Rows are ordered by `days_until`, ties in store order.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let window = i64::from(window_days);

        let mut upcoming: Vec<UpcomingBirthday> = self
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday_date()?;
                let date = birthday.next_anniversary(today)?;
                let days_until = birthday.days_until_next(today)?;
                (0..=window).contains(&days_until).then(|| UpcomingBirthday {
                    name: record.name().clone(),
                    date,
                    days_until,
                })
            })
            .collect();

        // stable sort keeps insertion order for equal distances
        upcoming.sort_by_key(|u| u.days_until);
        upcoming
    }
}
