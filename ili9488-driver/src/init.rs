//! Controller bring-up
//!
//! The register script is vendor-mandated and runs in a fixed order. The
//! only configurable bytes are the MADCTL value (orientation) and the
//! choice between INVOFF and INVON.
//!
//! Every transaction is checked and the first failure aborts the sequence.
//! After an abort the controller state is undefined; the caller has to
//! start over from [`init`](Ili9488::init).

use ili9488_hal::{Error, HardwareAccess, PinState};

use crate::cmd;
use crate::config::PanelConfig;
use crate::driver::{Ili9488, SLEEP_OUT_DELAY_MS};

/// Reset pulse width and post-reset settle time
const RESET_DELAY_MS: u32 = 120;

/// Settle time between the inversion setting and DISPON
const DISPLAY_ON_DELAY_MS: u32 = 120;

/// Number of register writes in the bring-up script
pub const INIT_STEPS: usize = 16;

/// One register write of the bring-up script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitStep {
    /// Command byte
    pub command: u8,
    /// Parameter bytes sent after the command
    pub params: &'static [u8],
    /// Delay after the last parameter (0 = none)
    pub delay_ms: u32,
}

impl InitStep {
    const fn new(command: u8, params: &'static [u8]) -> Self {
        Self {
            command,
            params,
            delay_ms: 0,
        }
    }

    const fn then_wait(mut self, ms: u32) -> Self {
        self.delay_ms = ms;
        self
    }
}

/// Build the register script for a configuration
pub fn init_script(config: &PanelConfig) -> [InitStep; INIT_STEPS] {
    let inversion = if config.invert_colors {
        cmd::INVON
    } else {
        cmd::INVOFF
    };

    [
        // Positive gamma
        InitStep::new(
            cmd::GMCTRP1,
            &[
                0x00, 0x13, 0x18, 0x04, 0x0F, 0x06, 0x3A, 0x56, 0x4D, 0x03, 0x0A, 0x06, 0x30, 0x3E,
                0x0F,
            ],
        ),
        // Negative gamma
        InitStep::new(
            cmd::GMCTRN1,
            &[
                0x00, 0x13, 0x18, 0x01, 0x11, 0x06, 0x38, 0x34, 0x4D, 0x06, 0x0D, 0x0B, 0x31, 0x37,
                0x0F,
            ],
        ),
        InitStep::new(cmd::PWCTR1, &[0x18, 0x16]),
        InitStep::new(cmd::PWCTR2, &[0x45]),
        // VCOM
        InitStep::new(cmd::VMCTR1, &[0x00, 0x63, 0x01]),
        InitStep::new(cmd::MADCTL, config.orientation.madctl_params()),
        // 18 bits per pixel over SPI
        InitStep::new(cmd::PIXFMT, &[0x66]),
        // SDO not used
        InitStep::new(cmd::IFMODE, &[0x80]),
        // ~70 Hz
        InitStep::new(cmd::FRMCTR1, &[0x00, 0x10]),
        InitStep::new(cmd::INVCTR, &[0x02]),
        InitStep::new(cmd::DFUNCTR, &[0x02]),
        InitStep::new(cmd::SETIMAGE, &[0x00]),
        InitStep::new(cmd::ADJCTL3, &[0xA9, 0x51, 0x2C, 0x82]),
        InitStep::new(cmd::SLPOUT, &[]).then_wait(SLEEP_OUT_DELAY_MS),
        InitStep::new(inversion, &[]).then_wait(DISPLAY_ON_DELAY_MS),
        InitStep::new(cmd::DISPON, &[]),
    ]
}

impl<H: HardwareAccess> Ili9488<H> {
    /// Bring the controller from reset to an operational display
    ///
    /// Fails with [`Error::MissingCapability`] without touching the
    /// hardware if the contract is incomplete. Otherwise returns the first
    /// failing transaction's error.
    pub fn init(&mut self) -> Result<(), Error> {
        if !self.hw().is_populated() {
            #[cfg(feature = "defmt")]
            defmt::error!("ILI9488 init: hardware contract incomplete");
            return Err(Error::MissingCapability);
        }

        #[cfg(feature = "defmt")]
        defmt::info!("ILI9488 init: {}", self.config());

        self.hard_reset()?;

        let script = init_script(self.config());
        for step in script.iter() {
            self.write_command(step.command, step.params).map_err(|e| {
                #[cfg(feature = "defmt")]
                defmt::warn!("ILI9488 init aborted at register {=u8:#x}: {}", step.command, e);
                e
            })?;

            if step.delay_ms > 0 {
                self.hw().delay_ms(step.delay_ms);
            }
        }

        #[cfg(feature = "defmt")]
        defmt::info!("ILI9488 ready ({}x{})", self.width(), self.height());

        Ok(())
    }

    /// Pulse the reset line and leave the control lines idle
    pub fn hard_reset(&mut self) -> Result<(), Error> {
        let hw = self.hw();
        hw.set_reset(PinState::Deasserted)?;
        hw.set_cs(PinState::Deasserted)?;
        hw.set_mode(PinState::Asserted)?;
        hw.set_reset(PinState::Asserted)?;
        hw.delay_ms(RESET_DELAY_MS);
        hw.set_reset(PinState::Deasserted)?;
        hw.delay_ms(RESET_DELAY_MS);
        Ok(())
    }
}
