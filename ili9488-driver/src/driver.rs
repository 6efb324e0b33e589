//! ILI9488 driver core
//!
//! # Transactions
//!
//! Every single-byte write is one bus transaction:
//!
//! 1. D/C: deasserted for a command, asserted for data
//! 2. CS asserted
//! 3. one byte transmitted
//! 4. CS deasserted, even if the transmit failed
//!
//! The bulk [`draw`](Ili9488::draw) is the exception: it leaves CS asserted
//! because the transfer may still be running when `transmit` returns.
//! Call [`finish_draw`](Ili9488::finish_draw) once it has completed.

use ili9488_hal::{Error, HardwareAccess, PinState};

use crate::cmd;
use crate::config::{Orientation, PanelConfig};

/// Delay after SLPOUT before the next command
pub(crate) const SLEEP_OUT_DELAY_MS: u32 = 120;

/// Delay after SLPIN before the next command
const SLEEP_IN_DELAY_MS: u32 = 5;

/// Delay after SWRESET before the next command
const SOFT_RESET_DELAY_MS: u32 = 120;

/// ILI9488 panel driver
///
/// Generic over the hardware contract. Pass `&mut hw` to keep ownership of
/// the hardware on the caller's side.
pub struct Ili9488<H> {
    hw: H,
    config: PanelConfig,
}

impl<H: HardwareAccess> Ili9488<H> {
    /// Create a new driver. Nothing is sent until [`init`](Self::init).
    pub fn new(hw: H, config: PanelConfig) -> Self {
        Self { hw, config }
    }

    /// Get the configuration
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Visible width for the current orientation
    pub fn width(&self) -> u16 {
        self.config.width()
    }

    /// Visible height for the current orientation
    pub fn height(&self) -> u16 {
        self.config.height()
    }

    /// Give the hardware contract back
    pub fn release(self) -> H {
        self.hw
    }

    pub(crate) fn hw(&mut self) -> &mut H {
        &mut self.hw
    }

    /// Send a command byte
    pub fn send_command(&mut self, command: u8) -> Result<(), Error> {
        self.transaction(PinState::Deasserted, command)
    }

    /// Send a data (parameter) byte
    pub fn send_data(&mut self, data: u8) -> Result<(), Error> {
        self.transaction(PinState::Asserted, data)
    }

    /// Send a command followed by its parameter bytes
    ///
    /// Stops at the first failing transaction.
    pub fn write_command(&mut self, command: u8, params: &[u8]) -> Result<(), Error> {
        self.send_command(command)?;
        for &p in params {
            self.send_data(p)?;
        }
        Ok(())
    }

    fn transaction(&mut self, mode: PinState, byte: u8) -> Result<(), Error> {
        self.hw.set_mode(mode)?;
        self.hw.set_cs(PinState::Asserted)?;
        let sent = self.hw.transmit(&[byte]);
        let released = self.hw.set_cs(PinState::Deasserted);
        // A transmit failure takes precedence over a release failure
        sent.and(released)
    }

    /// Stream pre-encoded pixel data into the current window
    ///
    /// Must directly follow [`set_window`](Self::set_window). The driver
    /// does not track whether a window is armed: without one the data lands
    /// in whatever range was addressed last.
    ///
    /// CS stays asserted on return. Call [`finish_draw`](Self::finish_draw)
    /// once the transfer has completed, before any other operation.
    pub fn draw(&mut self, pixels: &[u8]) -> Result<(), Error> {
        self.hw.set_mode(PinState::Asserted)?;
        self.hw.set_cs(PinState::Asserted)?;
        self.hw.transmit(pixels)
    }

    /// Release CS after a bulk draw
    pub fn finish_draw(&mut self) -> Result<(), Error> {
        self.hw.set_cs(PinState::Deasserted)
    }

    /// Turn the display output on or off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), Error> {
        if on {
            self.send_command(cmd::DISPON)
        } else {
            self.send_command(cmd::DISPOFF)
        }
    }

    /// Enter or leave sleep mode
    pub fn set_sleep(&mut self, sleep: bool) -> Result<(), Error> {
        if sleep {
            self.send_command(cmd::SLPIN)?;
            self.hw.delay_ms(SLEEP_IN_DELAY_MS);
        } else {
            self.send_command(cmd::SLPOUT)?;
            self.hw.delay_ms(SLEEP_OUT_DELAY_MS);
        }
        Ok(())
    }

    /// Invert display colors
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), Error> {
        if inverted {
            self.send_command(cmd::INVON)
        } else {
            self.send_command(cmd::INVOFF)
        }
    }

    /// Change scan orientation
    ///
    /// The stored configuration is only updated if the write succeeds.
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), Error> {
        self.write_command(cmd::MADCTL, &[orientation.madctl()])?;
        self.config.orientation = orientation;

        #[cfg(feature = "defmt")]
        defmt::debug!("ILI9488 orientation set to {}", orientation);

        Ok(())
    }

    /// Software reset (SWRESET)
    ///
    /// Registers return to their defaults; run [`init`](Self::init) again
    /// afterwards.
    pub fn software_reset(&mut self) -> Result<(), Error> {
        self.send_command(cmd::SWRESET)?;
        self.hw.delay_ms(SOFT_RESET_DELAY_MS);

        #[cfg(feature = "defmt")]
        defmt::debug!("ILI9488 software reset");

        Ok(())
    }
}
