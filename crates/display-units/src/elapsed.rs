//! Travel/elapsed time labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A duration split into whole hours and leftover whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedTime {
    pub hours: u64,
    pub minutes: u64,
}

/// Split `total_seconds` into hours and minutes, dropping leftover seconds.
pub fn format_elapsed(total_seconds: u64) -> ElapsedTime {
    ElapsedTime {
        hours: total_seconds / 3600,
        minutes: (total_seconds % 3600) / 60,
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.hours, self.minutes) {
            (0, 0) => write!(f, "1분 미만"),
            (0, m) => write!(f, "{}분", m),
            (h, m) => write!(f, "{}시간 {}분", h, m),
        }
    }
}
