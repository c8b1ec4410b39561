use chrono::DateTime;
use chrono::Utc;

/// Source of the current time for token issuance and expiry checks.
///
/// Injected into [`crate::TokenHandler`] so expiry logic is a pure function
/// of (token, secret, clock) and can be tested with arbitrary timestamps.
pub trait Clock {
    /// Current time in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
