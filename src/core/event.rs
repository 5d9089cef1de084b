//! Occupancy event type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A timestamped +1/-1 delta recording an arrival or departure
///
/// One +1 event is appended per occupy and one -1 per matching release. The
/// log is append-only and exists solely to reconstruct the historical peak
/// concurrent occupancy: sort by time, run a cumulative sum, take the max.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyEvent {
    /// When the arrival or departure happened
    pub time: DateTime<Utc>,
    /// +1 for an arrival, -1 for a departure
    pub delta: i32,
}

impl OccupancyEvent {
    /// A vehicle entered a slot at `time`
    #[must_use]
    pub const fn arrival(time: DateTime<Utc>) -> Self {
        Self { time, delta: 1 }
    }

    /// A vehicle left a slot at `time`
    #[must_use]
    pub const fn departure(time: DateTime<Utc>) -> Self {
        Self { time, delta: -1 }
    }
}
