//! Core domain types for parkdesk
//!
//! This module holds the data model shared by the lot state machine and the
//! HTTP views: slots, tickets, occupancy events, and the clock capability
//! used to stamp them.

pub mod clock;
pub mod event;
pub mod slot;
pub mod ticket;

pub use clock::{Clock, SystemClock};
pub use event::OccupancyEvent;
pub use slot::Slot;
pub use ticket::{Ticket, TicketId, VehicleDetails};
