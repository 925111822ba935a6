use chrono::{Duration, Local, NaiveDate};

/// Date format used for StudyLog and MockTestResult dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of the current local calendar date.
/// Stores never read the wall clock directly; they ask their clock.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    fn yesterday(&self) -> NaiveDate {
        self.today() - Duration::days(1)
    }
}

/// Wall-clock implementation backed by the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date, for tests and replaying history.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Render a date in the `YYYY-MM-DD` key format.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` string.
pub fn parse_date(s: &str) -> Result<NaiveDate, crate::error::TrackerError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| crate::error::TrackerError::from(e).with_context(format!("value: {:?}", s)))
}
