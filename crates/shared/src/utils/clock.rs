use chrono::{DateTime, Days, FixedOffset, NaiveDateTime, NaiveTime, Utc};
use std::sync::{Arc, Mutex};

pub type DynClock = Arc<dyn Clock + Send + Sync>;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to an instant until moved with [`FixedClock::set`].
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Arc<Mutex<DateTime<Utc>>>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Arc::new(Mutex::new(instant)),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        let mut guard = self.instant.lock().unwrap_or_else(|e| e.into_inner());
        *guard = instant;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Half-open `[start, end)` bounds, in UTC, of the calendar day containing an
/// instant as seen from the venue's offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DayWindow {
    pub fn containing(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        let local_day = now.with_timezone(&offset).date_naive();
        let local_start = local_day.and_time(NaiveTime::MIN);
        let local_end = local_day
            .checked_add_days(Days::new(1))
            .unwrap_or(local_day)
            .and_time(NaiveTime::MIN);

        let shift = chrono::Duration::seconds(i64::from(offset.local_minus_utc()));

        Self {
            start: local_start - shift,
            end: local_end - shift,
        }
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at < self.end
    }
}
