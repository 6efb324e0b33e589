//! Hardware access contract
//!
//! The five capabilities the driver needs from a board. Implementations
//! own the actual peripherals; the driver only calls through this trait.

use crate::error::Error;
use crate::gpio::PinState;

/// Capability set for driving an ILI9488 over a byte-serial bus
///
/// None of the methods carry implicit state beyond the line levels they
/// set. `transmit` may be asynchronous: an implementation backed by DMA can
/// return as soon as the transfer is started and signal completion out of
/// band.
pub trait HardwareAccess {
    /// Drive the chip-select line
    fn set_cs(&mut self, state: PinState) -> Result<(), Error>;

    /// Drive the mode-select (D/C) line
    ///
    /// Asserted selects data, deasserted selects command.
    fn set_mode(&mut self, state: PinState) -> Result<(), Error>;

    /// Drive the reset line
    fn set_reset(&mut self, state: PinState) -> Result<(), Error>;

    /// Transmit `bytes` over the bus
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), Error>;

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);

    /// Check that every capability is present
    ///
    /// Trait implementations are complete by construction. Only runtime
    /// tables such as [`CallbackTable`](crate::CallbackTable) can report
    /// `false`.
    fn is_populated(&self) -> bool {
        true
    }
}

// Lets the driver borrow a caller-owned implementation
impl<T: HardwareAccess + ?Sized> HardwareAccess for &mut T {
    fn set_cs(&mut self, state: PinState) -> Result<(), Error> {
        T::set_cs(self, state)
    }

    fn set_mode(&mut self, state: PinState) -> Result<(), Error> {
        T::set_mode(self, state)
    }

    fn set_reset(&mut self, state: PinState) -> Result<(), Error> {
        T::set_reset(self, state)
    }

    fn transmit(&mut self, bytes: &[u8]) -> Result<(), Error> {
        T::transmit(self, bytes)
    }

    fn delay_ms(&mut self, ms: u32) {
        T::delay_ms(self, ms)
    }

    fn is_populated(&self) -> bool {
        T::is_populated(self)
    }
}
