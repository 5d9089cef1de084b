//! Read-only state views
//!
//! [`LotSnapshot`] is what `GET /api/parking/state` serializes: the full slot
//! list, every ticket most-recent-first with its derived duration, and a
//! freshly computed statistics block. Assembly never mutates the stores.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::{OccupancyEvent, Slot, Ticket, TicketId};

use super::stats::{self, SummaryStats};

/// A ticket as shown to callers, with its derived duration attached
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketView {
    /// Ticket identity
    pub id: TicketId,
    /// Slot the ticket belongs to
    pub slot_id: u32,
    /// License plate
    pub car_number: String,
    /// Owner display name
    pub owner_name: String,
    /// Contact phone number
    pub phone: String,
    /// Entry time
    pub timestamp: DateTime<Utc>,
    /// Exit time, absent while the ticket is open
    pub exit_time: Option<DateTime<Utc>>,
    /// Parking duration in minutes, present only once closed
    pub duration_minutes: Option<f64>,
}

impl From<&Ticket> for TicketView {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id.clone(),
            slot_id: ticket.slot_id,
            car_number: ticket.car_number.clone(),
            owner_name: ticket.owner_name.clone(),
            phone: ticket.phone.clone(),
            timestamp: ticket.timestamp,
            exit_time: ticket.exit_time,
            duration_minutes: ticket.duration_minutes(),
        }
    }
}

/// Complete read-only view of the lot at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LotSnapshot {
    /// All slots, in registry order
    pub slots: Vec<Slot>,
    /// All tickets, ordered by entry time descending
    pub tickets: Vec<TicketView>,
    /// Statistics recomputed for this snapshot
    pub stats: SummaryStats,
}

impl LotSnapshot {
    /// Builds the view from the raw stores as of `now`
    #[must_use]
    pub fn assemble(
        slots: &[Slot],
        tickets: &[Ticket],
        events: &[OccupancyEvent],
        now: DateTime<Utc>,
    ) -> Self {
        let mut ticket_views: Vec<TicketView> = tickets.iter().map(TicketView::from).collect();
        // Stable sort: simultaneous entries keep log order, newest first.
        ticket_views.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Self {
            slots: slots.to_vec(),
            tickets: ticket_views,
            stats: stats::compute(slots, tickets, events, now),
        }
    }
}
