//! Test utilities for parkdesk
//!
//! Common fixtures shared by the unit tests: a deterministic clock and
//! vehicle builders.

#![cfg(test)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Mutex;

use crate::core::{Clock, VehicleDetails};

/// A clock that only moves when the test says so
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Starts the clock at the given instant
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock forward
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().expect("manual clock lock");
        *now = *now + by;
    }
}

impl Default for ManualClock {
    /// Starts at a fixed mid-day instant so tests never straddle midnight
    fn default() -> Self {
        Self::starting_at(Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("manual clock lock")
    }
}

/// Vehicle details with a given plate and placeholder owner contact
pub fn vehicle(car_number: &str) -> VehicleDetails {
    VehicleDetails {
        car_number: car_number.to_string(),
        owner_name: "Jane".to_string(),
        phone: "5550100".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances_on_demand() {
        let clock = ManualClock::default();
        let start = clock.now();

        assert_eq!(clock.now(), start);
        clock.advance(Duration::minutes(30));
        assert_eq!(clock.now(), start + Duration::minutes(30));
    }
}
