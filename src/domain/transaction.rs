use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{new_id, Amounted, Displayable, Identifiable};
use crate::domain::dates;

/// A single dated, categorised monetary entry.
///
/// `category` is a free-text label: it is not tied to a stored category id,
/// so deleting a category leaves existing transactions untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub category: String,
    pub amount: f64,
    pub date: String,
}

impl Transaction {
    pub fn new(category: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            id: new_id(),
            category: category.into(),
            amount,
            date: dates::format_date(date),
        }
    }

    /// Calendar day the transaction belongs to, if its date can be read.
    pub fn calendar_day(&self) -> Option<NaiveDate> {
        dates::calendar_day(&self.date)
    }

    pub fn falls_on(&self, day: NaiveDate) -> bool {
        self.calendar_day() == Some(day)
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} {} {}", self.date, self.category, self.amount)
    }
}

/// Sum of amounts for one category within a filtered set of transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}
