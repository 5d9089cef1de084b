//! Parking slot type

use serde::{Deserialize, Serialize};

/// A physical parking space with a stable identity and binary occupancy state
///
/// Slots are created once at startup and never deleted or resized; only the
/// `occupied` flag changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// Numeric identity, 1..=N with N fixed at startup
    pub id: u32,
    /// Display name derived from the id, zero-padded ("S01")
    pub name: String,
    /// Whether a vehicle currently occupies the slot
    pub occupied: bool,
}

impl Slot {
    /// Creates a free slot with a display name derived from its id
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: format!("S{id:02}"),
            occupied: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_slot_is_free() {
        let slot = Slot::new(1);
        assert!(!slot.occupied);
    }

    #[test]
    fn test_name_is_zero_padded() {
        assert_eq!(Slot::new(1).name, "S01");
        assert_eq!(Slot::new(20).name, "S20");
        // Wider ids keep their digits rather than truncating
        assert_eq!(Slot::new(120).name, "S120");
    }
}
