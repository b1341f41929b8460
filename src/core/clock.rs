use chrono::{Local, NaiveDate};

/// Clock abstracts access to the current day so services remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the user's current calendar day.
    fn today(&self) -> NaiveDate;
}

/// Real-time clock; "today" follows the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
