//! Function-pointer contract
//!
//! Some board-support packages expose their pins and bus as free functions
//! (vendor HAL wrappers, C shims). [`CallbackTable`] collects those into a
//! [`HardwareAccess`] implementation. Any slot may be left empty; the driver
//! checks [`HardwareAccess::is_populated`] before it touches the hardware.

use crate::access::HardwareAccess;
use crate::error::{Error, Status};
use crate::gpio::PinState;

/// Pin setter callback
pub type PinFn = fn(PinState);

/// Bus transmit callback
pub type TransmitFn = fn(&[u8]) -> Status;

/// Millisecond delay callback
pub type DelayFn = fn(u32);

/// Table of board callbacks
#[derive(Clone, Copy, Default)]
pub struct CallbackTable {
    /// Chip-select setter
    pub cs: Option<PinFn>,
    /// Mode-select (D/C) setter
    pub mode: Option<PinFn>,
    /// Reset setter
    pub reset: Option<PinFn>,
    /// Bus transmit
    pub transmit: Option<TransmitFn>,
    /// Millisecond delay
    pub delay: Option<DelayFn>,
}

impl CallbackTable {
    /// Create a fully populated table
    pub const fn new(
        cs: PinFn,
        mode: PinFn,
        reset: PinFn,
        transmit: TransmitFn,
        delay: DelayFn,
    ) -> Self {
        Self {
            cs: Some(cs),
            mode: Some(mode),
            reset: Some(reset),
            transmit: Some(transmit),
            delay: Some(delay),
        }
    }

    /// Create a table with every slot empty
    pub const fn empty() -> Self {
        Self {
            cs: None,
            mode: None,
            reset: None,
            transmit: None,
            delay: None,
        }
    }
}

fn call_pin(slot: Option<PinFn>, state: PinState) -> Result<(), Error> {
    let f = slot.ok_or(Error::MissingCapability)?;
    f(state);
    Ok(())
}

impl HardwareAccess for CallbackTable {
    fn set_cs(&mut self, state: PinState) -> Result<(), Error> {
        call_pin(self.cs, state)
    }

    fn set_mode(&mut self, state: PinState) -> Result<(), Error> {
        call_pin(self.mode, state)
    }

    fn set_reset(&mut self, state: PinState) -> Result<(), Error> {
        call_pin(self.reset, state)
    }

    fn transmit(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let f = self.transmit.ok_or(Error::MissingCapability)?;
        f(bytes).into_result()
    }

    fn delay_ms(&mut self, ms: u32) {
        // Missing delay is caught by is_populated() before init runs
        if let Some(f) = self.delay {
            f(ms);
        }
    }

    fn is_populated(&self) -> bool {
        self.cs.is_some()
            && self.mode.is_some()
            && self.reset.is_some()
            && self.transmit.is_some()
            && self.delay.is_some()
    }
}
