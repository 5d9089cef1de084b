//! Ticket types
//!
//! A ticket records one occupancy episode for a slot, from entry to exit.
//! It is created by occupy with no exit time, mutated exactly once by release
//! to set the exit time, and never deleted afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a ticket
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(Uuid);

impl TicketId {
    /// Generates a new random ticket ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TicketId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Vehicle and owner details captured when a slot is occupied
///
/// Format validation (letters-only names, digits-only phones) is the
/// transport's concern; the core stores these strings as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetails {
    /// License plate
    pub car_number: String,
    /// Owner display name
    pub owner_name: String,
    /// Contact phone number
    pub phone: String,
}

/// Record of one occupancy episode for a slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Unique ticket identity
    pub id: TicketId,
    /// Slot this ticket belongs to
    pub slot_id: u32,
    /// License plate
    pub car_number: String,
    /// Owner display name
    pub owner_name: String,
    /// Contact phone number
    pub phone: String,
    /// Entry time, stamped by the lot's clock at occupy
    pub timestamp: DateTime<Utc>,
    /// Exit time, set exactly once by release
    pub exit_time: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Opens a new ticket for a slot at the given entry time
    #[must_use]
    pub fn new(slot_id: u32, vehicle: VehicleDetails, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: TicketId::new(),
            slot_id,
            car_number: vehicle.car_number,
            owner_name: vehicle.owner_name,
            phone: vehicle.phone,
            timestamp,
            exit_time: None,
        }
    }

    /// A ticket is open while it has no recorded exit time
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.exit_time.is_none()
    }

    /// Parking duration in minutes, present only once the ticket is closed
    #[must_use]
    pub fn duration_minutes(&self) -> Option<f64> {
        self.exit_time
            .map(|exit| (exit - self.timestamp).num_milliseconds() as f64 / 60_000.0)
    }
}
