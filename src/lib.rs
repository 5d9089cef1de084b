//! parkdesk - A small parking slot and ticket management service
//!
//! This crate tracks occupancy of a fixed set of parking slots, issues and
//! closes tickets for vehicles, and derives daily statistics on demand:
//! - Slot registry created once at startup, occupancy flipped per operation
//! - Append-mostly ticket log, one ticket per occupancy episode
//! - Append-only occupancy event log used to reconstruct peak occupancy
//! - A JSON HTTP API in front of the core operations
//!
//! # Concurrent Safety
//!
//! All three in-memory stores (slots, tickets, events) live behind a single
//! mutex inside [`lot::ParkingLot`], so each occupy/release call updates them
//! as one atomic unit. Two requests racing for the same free slot cannot both
//! succeed; the loser gets a recoverable error.
//!
//! # Example
//!
//! ```rust,ignore
//! use parkdesk::core::VehicleDetails;
//! use parkdesk::lot::ParkingLot;
//!
//! let lot = ParkingLot::new(20);
//! let ticket = lot.occupy(5, VehicleDetails {
//!     car_number: "ABC123".into(),
//!     owner_name: "Jane".into(),
//!     phone: "555".into(),
//! })?;
//! let closed = lot.release(5)?;
//! assert!(closed.exit_time.is_some());
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod lot;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{ParkdeskError, Result};
