use crate::application::ports::time::Clock;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to the start of a given day, for evaluating due dates "as of".
#[derive(Clone)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn start_of(day: NaiveDate) -> Self {
        Self(day.and_time(chrono::NaiveTime::MIN).and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
