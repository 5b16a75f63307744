use std::time::{SystemTime, UNIX_EPOCH};

use crate::time::TimeSource;

/// The operating system's wall clock, truncated to milliseconds.
///
/// This clock follows every adjustment made to the system time, including
/// backward steps from NTP corrections.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_millis(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_millis() as i64,
            // A clock set before 1970 reports negative time.
            Err(e) => -(e.duration().as_millis() as i64),
        }
    }
}
