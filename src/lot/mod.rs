//! Parking lot state and operations
//!
//! [`ParkingLot`] owns the three in-memory stores — slot registry, ticket log,
//! occupancy event log — behind one mutex, and exposes the operations that
//! mutate them consistently: [`ParkingLot::occupy`] and
//! [`ParkingLot::release`]. Reads go through [`ParkingLot::snapshot`], which
//! recomputes statistics on every call.

pub mod snapshot;
pub mod stats;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

use crate::core::{Clock, OccupancyEvent, Slot, SystemClock, Ticket, VehicleDetails};
use crate::error::{ParkdeskError, Result};
use self::snapshot::LotSnapshot;

/// The three stores guarded as one unit
struct LotState {
    slots: Vec<Slot>,
    tickets: Vec<Ticket>,
    events: Vec<OccupancyEvent>,
}

impl LotState {
    fn new(slot_count: u32) -> Self {
        Self {
            slots: (1..=slot_count).map(Slot::new).collect(),
            tickets: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Index of the slot with the given caller-supplied id
    ///
    /// Takes `i64` so malformed ids (negative, out of range) fold into
    /// "not found" rather than becoming a separate fault class.
    fn slot_index(&self, slot_id: i64) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| i64::from(s.id) == slot_id)
    }

    /// Index of the open ticket to close for a slot
    ///
    /// Multiple open tickets per slot cannot be produced through the public
    /// operations, but if the log ever held more than one, the latest entry
    /// timestamp wins.
    fn open_ticket_index(&self, slot_id: u32) -> Option<usize> {
        self.tickets
            .iter()
            .enumerate()
            .filter(|(_, t)| t.slot_id == slot_id && t.is_open())
            .max_by_key(|(_, t)| t.timestamp)
            .map(|(idx, _)| idx)
    }
}

/// In-memory parking lot: slot registry, ticket log, and occupancy event log
///
/// One instance lives for the process lifetime and is shared with the HTTP
/// layer via `Arc`. All mutations happen under a single lock, so concurrent
/// occupy calls on the same slot cannot both succeed.
pub struct ParkingLot {
    clock: Arc<dyn Clock>,
    state: Mutex<LotState>,
}

impl ParkingLot {
    /// Creates a lot with `slot_count` free slots, stamped by the system clock
    #[must_use]
    pub fn new(slot_count: u32) -> Self {
        Self::with_clock(slot_count, Arc::new(SystemClock))
    }

    /// Creates a lot with an injected time source
    #[must_use]
    pub fn with_clock(slot_count: u32, clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            state: Mutex::new(LotState::new(slot_count)),
        }
    }

    /// Occupies a slot and opens a ticket for the vehicle
    ///
    /// Stamps the ticket with the lot clock at the moment of the call and
    /// appends a +1 occupancy event at the same instant. Returns the created
    /// ticket.
    ///
    /// # Errors
    ///
    /// Returns [`ParkdeskError::SlotUnavailable`] if the slot does not exist
    /// or is already occupied. Nothing is mutated on failure.
    pub fn occupy(&self, slot_id: i64, vehicle: VehicleDetails) -> Result<Ticket> {
        let mut state = self.lock_state();

        let idx = state
            .slot_index(slot_id)
            .filter(|&i| !state.slots[i].occupied)
            .ok_or(ParkdeskError::SlotUnavailable { slot_id })?;

        let now = self.clock.now();
        let ticket = Ticket::new(state.slots[idx].id, vehicle, now);

        state.slots[idx].occupied = true;
        state.tickets.push(ticket.clone());
        state.events.push(OccupancyEvent::arrival(now));

        info!(
            slot_id = state.slots[idx].id,
            ticket_id = %ticket.id,
            car_number = %ticket.car_number,
            "slot occupied"
        );

        Ok(ticket)
    }

    /// Releases a slot and closes its open ticket
    ///
    /// Sets the ticket's exit time to the lot clock's current instant,
    /// appends a -1 occupancy event at that time, and frees the slot.
    /// Returns the closed ticket.
    ///
    /// # Errors
    ///
    /// Returns [`ParkdeskError::SlotNotOccupied`] if the slot does not exist,
    /// is free, or has no open ticket. Nothing is mutated on failure.
    pub fn release(&self, slot_id: i64) -> Result<Ticket> {
        let mut state = self.lock_state();

        let slot_idx = state
            .slot_index(slot_id)
            .filter(|&i| state.slots[i].occupied)
            .ok_or(ParkdeskError::SlotNotOccupied { slot_id })?;

        let ticket_idx = state
            .open_ticket_index(state.slots[slot_idx].id)
            .ok_or(ParkdeskError::SlotNotOccupied { slot_id })?;

        let now = self.clock.now();
        state.tickets[ticket_idx].exit_time = Some(now);
        state.events.push(OccupancyEvent::departure(now));
        state.slots[slot_idx].occupied = false;

        let ticket = state.tickets[ticket_idx].clone();
        info!(
            slot_id = state.slots[slot_idx].id,
            ticket_id = %ticket.id,
            minutes = ticket.duration_minutes(),
            "slot released"
        );

        Ok(ticket)
    }

    /// Assembles a read-only view of the whole lot
    ///
    /// Returns the full slot list, all tickets ordered most-recent-first with
    /// derived durations, and statistics freshly computed against the current
    /// ticket and event logs. Mutates nothing.
    #[must_use]
    pub fn snapshot(&self) -> LotSnapshot {
        let state = self.lock_state();
        let now = self.clock.now();
        debug!(
            tickets = state.tickets.len(),
            events = state.events.len(),
            "assembling lot snapshot"
        );
        LotSnapshot::assemble(&state.slots, &state.tickets, &state.events, now)
    }

    /// Latest ticket for a slot, open or closed
    ///
    /// Used by the release endpoint so the caller can show the just-closed
    /// ticket's duration.
    #[must_use]
    pub fn most_recent_ticket(&self, slot_id: i64) -> Option<Ticket> {
        let state = self.lock_state();
        state
            .tickets
            .iter()
            .filter(|t| i64::from(t.slot_id) == slot_id)
            .max_by_key(|t| t.timestamp)
            .cloned()
    }

    /// Number of slots in the registry
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.lock_state().slots.len()
    }

    fn lock_state(&self) -> MutexGuard<'_, LotState> {
        // Mutations happen after all fallible checks, so a poisoned lock
        // cannot hold half-updated stores; recover rather than propagate.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
