//! Control line state
//!
//! Line states are logical. What "asserted" means electrically is decided
//! by whoever implements [`HardwareAccess`](crate::HardwareAccess):
//!
//! | Line        | Asserted             | Deasserted         |
//! |-------------|----------------------|--------------------|
//! | chip-select | panel selected       | panel released     |
//! | mode-select | data / parameter     | command            |
//! | reset       | controller in reset  | controller running |

/// Logical state of a control line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    Asserted,
    Deasserted,
}

impl PinState {
    /// Electrical level for an active-high line
    pub fn active_high(self) -> bool {
        self == PinState::Asserted
    }

    /// Electrical level for an active-low line
    pub fn active_low(self) -> bool {
        self == PinState::Deasserted
    }
}

impl From<bool> for PinState {
    fn from(asserted: bool) -> Self {
        if asserted {
            PinState::Asserted
        } else {
            PinState::Deasserted
        }
    }
}
