//! Daily summary statistics
//!
//! A pure derivation over the ticket and event logs; recomputed on every
//! state read rather than maintained incrementally. At this scale a full
//! scan per read is the intended trade-off.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::Serialize;

use crate::core::{OccupancyEvent, Slot, Ticket};

/// Summary statistics for the daily panel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// Tickets whose entry timestamp falls on today's local calendar date
    pub total_today: usize,
    /// Maximum concurrent occupancy reached over recorded history
    pub peak_occupancy: i32,
    /// Mean parking duration in minutes over tickets closed and entered
    /// today; absent when no such ticket exists
    pub average_parking_minutes: Option<f64>,
    /// Slots currently flagged occupied, independent of the event log
    pub current_occupied: usize,
}

/// Computes the summary statistics as of `now`
///
/// "Today" is the local calendar date of `now`, matching how the tickets are
/// shown to operators.
#[must_use]
pub fn compute(
    slots: &[Slot],
    tickets: &[Ticket],
    events: &[OccupancyEvent],
    now: DateTime<Utc>,
) -> SummaryStats {
    let today = local_date(now);

    let total_today = tickets
        .iter()
        .filter(|t| local_date(t.timestamp) == today)
        .count();

    let finished_today: Vec<f64> = tickets
        .iter()
        .filter(|t| local_date(t.timestamp) == today)
        .filter_map(Ticket::duration_minutes)
        .collect();
    let average_parking_minutes = if finished_today.is_empty() {
        None
    } else {
        Some(finished_today.iter().sum::<f64>() / finished_today.len() as f64)
    };

    SummaryStats {
        total_today,
        peak_occupancy: peak_occupancy(events),
        average_parking_minutes,
        current_occupied: slots.iter().filter(|s| s.occupied).count(),
    }
}

/// Reconstructs the historical maximum concurrent occupancy
///
/// Sorts a copy of the event log by time (stable, so simultaneous events
/// keep insertion order) and tracks the running sum's maximum. The log is
/// never assumed to be pre-sorted.
fn peak_occupancy(events: &[OccupancyEvent]) -> i32 {
    let mut ordered = events.to_vec();
    ordered.sort_by_key(|e| e.time);

    let mut running = 0;
    let mut peak = 0;
    for event in &ordered {
        running += event.delta;
        if running > peak {
            peak = running;
        }
    }
    peak
}

fn local_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VehicleDetails;
    use chrono::Duration;

    fn ticket_at(slot_id: u32, entry: DateTime<Utc>, parked_minutes: Option<i64>) -> Ticket {
        let mut ticket = Ticket::new(
            slot_id,
            VehicleDetails {
                car_number: format!("CAR{slot_id:03}"),
                owner_name: "Jane".to_string(),
                phone: "555".to_string(),
            },
            entry,
        );
        ticket.exit_time = parked_minutes.map(|m| entry + Duration::minutes(m));
        ticket
    }

    /// Noon today in local time, so hour-scale offsets in the tests cannot
    /// cross a date boundary no matter when the suite runs.
    fn local_noon_today() -> DateTime<Utc> {
        Local::now()
            .date_naive()
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_local_timezone(Local)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn occupied_slots(count: u32, occupied: u32) -> Vec<Slot> {
        (1..=count)
            .map(|id| {
                let mut slot = Slot::new(id);
                slot.occupied = id <= occupied;
                slot
            })
            .collect()
    }

    #[test]
    fn test_empty_lot() {
        let stats = compute(&occupied_slots(20, 0), &[], &[], Utc::now());
        assert_eq!(stats.total_today, 0);
        assert_eq!(stats.peak_occupancy, 0);
        assert_eq!(stats.average_parking_minutes, None);
        assert_eq!(stats.current_occupied, 0);
    }

    #[test]
    fn test_total_today_ignores_yesterday() {
        let now = local_noon_today();
        let tickets = vec![
            ticket_at(1, now - Duration::days(1), Some(30)), // opened yesterday
            ticket_at(2, now - Duration::minutes(90), None),
            ticket_at(3, now - Duration::minutes(10), None),
        ];

        let stats = compute(&occupied_slots(5, 2), &tickets, &[], now);
        assert_eq!(stats.total_today, 2);
    }

    #[test]
    fn test_average_only_counts_tickets_closed_and_entered_today() {
        let now = local_noon_today();
        let tickets = vec![
            // Opened yesterday, closed today: excluded from today's average
            ticket_at(1, now - Duration::days(1), Some(60 * 25)),
            ticket_at(2, now - Duration::hours(2), Some(30)),
            ticket_at(3, now - Duration::hours(1), Some(60)),
            // Still open: no duration yet
            ticket_at(4, now - Duration::minutes(5), None),
        ];

        let stats = compute(&occupied_slots(5, 1), &tickets, &[], now);
        assert_eq!(stats.average_parking_minutes, Some(45.0));
    }

    #[test]
    fn test_average_absent_until_first_closure_today() {
        let now = local_noon_today();
        let open_only = vec![ticket_at(1, now, None)];
        let stats = compute(&occupied_slots(5, 1), &open_only, &[], now);
        assert_eq!(stats.average_parking_minutes, None);

        let with_closure = vec![ticket_at(1, now - Duration::minutes(20), Some(20))];
        let stats = compute(&occupied_slots(5, 0), &with_closure, &[], now);
        assert_eq!(stats.average_parking_minutes, Some(20.0));
    }

    #[test]
    fn test_peak_survives_release_and_reoccupy() {
        // Occupy 1, occupy 2, release 1, occupy 3: the peak of 2 was reached
        // while 1 and 2 overlapped, and reached again by a different pair.
        let t0 = Utc::now();
        let events = vec![
            OccupancyEvent::arrival(t0),
            OccupancyEvent::arrival(t0 + Duration::minutes(5)),
            OccupancyEvent::departure(t0 + Duration::minutes(10)),
            OccupancyEvent::arrival(t0 + Duration::minutes(15)),
        ];

        assert_eq!(peak_occupancy(&events), 2);
    }

    #[test]
    fn test_peak_sorts_rather_than_trusting_log_order() {
        let t0 = Utc::now();
        // Deliberately shuffled: in true time order the occupancy never
        // exceeds 1 (arrive, leave, arrive, leave).
        let events = vec![
            OccupancyEvent::arrival(t0 + Duration::minutes(20)),
            OccupancyEvent::departure(t0 + Duration::minutes(10)),
            OccupancyEvent::arrival(t0),
            OccupancyEvent::departure(t0 + Duration::minutes(30)),
        ];

        assert_eq!(peak_occupancy(&events), 1);
    }

    #[test]
    fn test_peak_keeps_insertion_order_for_equal_timestamps() {
        let t0 = Utc::now();
        // Arrival and departure at the identical instant: insertion order
        // (arrival first) applies, so the pair peaks at 1, not 0.
        let events = vec![
            OccupancyEvent::arrival(t0),
            OccupancyEvent::departure(t0),
        ];

        assert_eq!(peak_occupancy(&events), 1);
    }

    #[test]
    fn test_current_occupied_is_a_live_count() {
        let stats = compute(&occupied_slots(20, 7), &[], &[], Utc::now());
        assert_eq!(stats.current_occupied, 7);
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let stats = compute(&occupied_slots(2, 1), &[], &[], Utc::now());
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["totalToday"], 0);
        assert_eq!(json["peakOccupancy"], 0);
        assert!(json["averageParkingMinutes"].is_null());
        assert_eq!(json["currentOccupied"], 1);
    }
}
