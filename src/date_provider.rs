use chrono::{DateTime, NaiveDate, Timelike, Utc};

/// Source of "now" for the store and the report front-end.
///
/// Every timestamp and every `today` fed into the analytics flows through this
/// trait, so streak and window computations stay deterministic under test.
pub trait DateProvider: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Current UTC calendar day. All day-granularity bucketing in this crate
    /// uses UTC, uniformly.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Production provider backed by the system clock
pub struct SystemDateProvider;

impl DateProvider for SystemDateProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Provider pinned to a fixed calendar day (`--override-date`), keeping the
/// wall-clock time of day from the system
pub struct OverrideDateProvider {
    date: NaiveDate,
}

impl OverrideDateProvider {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl DateProvider for OverrideDateProvider {
    fn now(&self) -> DateTime<Utc> {
        let clock = Utc::now();
        let pinned = self
            .date
            .and_hms_opt(clock.hour(), clock.minute(), clock.second())
            .unwrap_or_else(|| self.date.and_hms_opt(0, 0, 0).unwrap());
        DateTime::from_naive_utc_and_offset(pinned, Utc)
    }
}
