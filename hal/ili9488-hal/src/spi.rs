//! `embedded-hal` 1.0 adapter
//!
//! Implements [`HardwareAccess`] on top of a 4-wire SPI bus, three GPIO
//! outputs and a delay provider. Chip-select is driven manually rather than
//! through `SpiDevice` because the bulk draw leaves it asserted across calls.
//!
//! Polarity follows the usual ILI9488 wiring:
//! - CS: active-low
//! - D/C: low for command, high for data
//! - RST: active-low

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::access::HardwareAccess;
use crate::error::Error;
use crate::gpio::PinState;

/// SPI + GPIO implementation of the hardware access contract
pub struct SpiInterface<SPI, CS, DC, RST, D> {
    spi: SPI,
    cs: CS,
    dc: DC,
    rst: RST,
    delay: D,
}

impl<SPI, CS, DC, RST, D> SpiInterface<SPI, CS, DC, RST, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    /// Create a new adapter
    ///
    /// # Arguments
    /// - `spi`: SPI bus (MOSI + SCK, MISO unused)
    /// - `cs`: chip-select pin
    /// - `dc`: data/command pin
    /// - `rst`: reset pin
    /// - `delay`: millisecond delay provider
    pub fn new(spi: SPI, cs: CS, dc: DC, rst: RST, delay: D) -> Self {
        Self {
            spi,
            cs,
            dc,
            rst,
            delay,
        }
    }

    /// Release the underlying peripherals
    pub fn release(self) -> (SPI, CS, DC, RST, D) {
        (self.spi, self.cs, self.dc, self.rst, self.delay)
    }
}

fn drive<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), Error> {
    let result = if high { pin.set_high() } else { pin.set_low() };
    result.map_err(|_| Error::Failed)
}

impl<SPI, CS, DC, RST, D> HardwareAccess for SpiInterface<SPI, CS, DC, RST, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    fn set_cs(&mut self, state: PinState) -> Result<(), Error> {
        drive(&mut self.cs, state.active_low())
    }

    fn set_mode(&mut self, state: PinState) -> Result<(), Error> {
        drive(&mut self.dc, state.active_high())
    }

    fn set_reset(&mut self, state: PinState) -> Result<(), Error> {
        drive(&mut self.rst, state.active_low())
    }

    fn transmit(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.spi.write(bytes).map_err(|_| Error::Failed)?;
        // Bus must be idle before the caller touches CS again
        self.spi.flush().map_err(|_| Error::Failed)
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
