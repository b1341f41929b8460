use chrono::NaiveDate;

use crate::domain::dates::{shift_days, weekday_label};

/// Days shown on each side of the selected day in the navigation strip.
pub const DAYS_AROUND_SELECTED: i64 = 3;

/// One entry of the seven-day navigation strip. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_selected: bool,
    pub name: String,
}

impl Day {
    pub fn new(date: NaiveDate, selected: NaiveDate, today: NaiveDate) -> Self {
        Self {
            date,
            is_today: date == today,
            is_selected: date == selected,
            name: weekday_label(date),
        }
    }

    /// The strip centred on `selected`: three days before through three after.
    pub fn week_around(selected: NaiveDate, today: NaiveDate) -> Vec<Day> {
        (-DAYS_AROUND_SELECTED..=DAYS_AROUND_SELECTED)
            .map(|offset| Day::new(shift_days(selected, offset), selected, today))
            .collect()
    }
}
