//! Error types for parkdesk
//!
//! The core has exactly two expected failure modes: occupying a slot that is
//! missing or taken, and releasing a slot that is missing or free. Both are
//! recoverable conditions reported to the caller, never fatal faults. The
//! remaining variants cover the ambient concerns (configuration, I/O) around
//! the core.

use thiserror::Error;

/// Result type alias using `ParkdeskError`
pub type Result<T> = std::result::Result<T, ParkdeskError>;

/// All errors that can occur in parkdesk
#[derive(Debug, Error)]
pub enum ParkdeskError {
    /// Occupy targeted a slot that does not exist or is already occupied
    #[error("slot {slot_id} is not available")]
    SlotUnavailable {
        /// The slot id as supplied by the caller
        slot_id: i64,
    },

    /// Release targeted a slot that does not exist, is free, or has no open ticket
    #[error("slot {slot_id} is not occupied")]
    SlotNotOccupied {
        /// The slot id as supplied by the caller
        slot_id: i64,
    },

    /// Configuration loading or parsing failed
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParkdeskError {
    /// Message suitable for showing to an API caller
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::SlotUnavailable { slot_id } => {
                format!("Slot {slot_id} is not available")
            },
            Self::SlotNotOccupied { slot_id } => {
                format!("Slot {slot_id} is not occupied")
            },
            other => other.to_string(),
        }
    }

    /// Whether the caller can simply retry with different input
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::SlotUnavailable { .. } | Self::SlotNotOccupied { .. }
        )
    }
}
