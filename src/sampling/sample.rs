use crate::memory::FAILURE_SENTINEL;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// One footprint reading.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemorySample {
    pub taken_at: DateTime<Utc>,
    pub megabytes: f64,
}

impl MemorySample {
    pub fn new(taken_at: DateTime<Utc>, megabytes: f64) -> Self {
        Self {
            taken_at,
            megabytes,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.megabytes == FAILURE_SENTINEL
    }
}

impl Display for MemorySample {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let at = self.taken_at.to_rfc3339_opts(SecondsFormat::Millis, true);
        if self.is_failure() {
            write!(f, "{at} query failed")
        } else {
            write!(f, "{at} {:.3} MB", self.megabytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn display_formats_value_and_failure() {
        let at = Utc.with_ymd_and_hms(2025, 9, 21, 12, 0, 0).unwrap();
        assert_eq!(
            MemorySample::new(at, 100.0).to_string(),
            "2025-09-21T12:00:00.000Z 100.000 MB"
        );
        assert_eq!(
            MemorySample::new(at, -1.0).to_string(),
            "2025-09-21T12:00:00.000Z query failed"
        );
    }

    #[test]
    fn only_the_sentinel_is_a_failure() {
        let at = Utc::now();
        assert!(MemorySample::new(at, -1.0).is_failure());
        assert!(!MemorySample::new(at, 0.0).is_failure());
        assert!(!MemorySample::new(at, 0.5).is_failure());
    }
}
