use casa_check_core::application::ports::time::Clock;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Fixed timestamp for deterministic overdue checks.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-10T09:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

#[derive(Clone, Default)]
pub struct FixedTestClock;

impl Clock for FixedTestClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}
