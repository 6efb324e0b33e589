//! ILI9488 bring-up firmware
//!
//! Drives an ILI9488 panel from an RP2040 over SPI1 and cycles a colour
//! test pattern. Orientation, inversion and bus speed come from panel.toml.
//!
//! Wiring:
//!
//! | Signal | Pin    |
//! |--------|--------|
//! | SCK    | GPIO10 |
//! | MOSI   | GPIO11 |
//! | CS     | GPIO9  |
//! | D/C    | GPIO8  |
//! | RST    | GPIO12 |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::{self, Spi};
use embassy_time::{Delay, Timer};
use ili9488_driver::{Ili9488, Window};
use ili9488_hal::SpiInterface;
use {defmt_rtt as _, panic_probe as _};

mod board;
mod paint;

use paint::{BLACK, BLUE, GREEN, RED, WHITE};

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("ILI9488 firmware starting...");

    let p = embassy_rp::init(Default::default());

    let mut spi_config = spi::Config::default();
    spi_config.frequency = board::SPI_FREQUENCY_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, spi_config);

    // Idle levels: chip deselected, data mode, out of reset
    let cs = Output::new(p.PIN_9, Level::High);
    let dc = Output::new(p.PIN_8, Level::High);
    let rst = Output::new(p.PIN_12, Level::High);

    let hw = SpiInterface::new(spi, cs, dc, rst, Delay);
    let mut lcd = Ili9488::new(hw, board::PANEL_CONFIG);

    info!(
        "Panel config: {}, {}x{} @ {} Hz",
        lcd.config(),
        lcd.width(),
        lcd.height(),
        board::SPI_FREQUENCY_HZ
    );

    // Bring-up restarts from hardware reset on any failure
    loop {
        match lcd.init() {
            Ok(()) => break,
            Err(e) => {
                error!("Panel init failed: {}", e);
                Timer::after_millis(board::INIT_RETRY_MS).await;
                info!("Retrying panel init");
            }
        }
    }
    info!("Panel initialized");

    let full = Window::full(lcd.width(), lcd.height());
    let frames: [&[[u8; 3]]; 3] = [&[RED, GREEN, BLUE], &[WHITE], &[BLACK, WHITE]];

    loop {
        for colours in frames {
            let result = if colours.len() == 1 {
                paint::fill_window(&mut lcd, full, colours[0])
            } else {
                paint::vertical_bands(&mut lcd, colours)
            };

            if let Err(e) = result {
                warn!("Frame failed: {}", e);
                // Leave the bus idle before the next frame
                if let Err(e) = lcd.finish_draw() {
                    warn!("CS release failed: {}", e);
                }
            }

            Timer::after_millis(board::FRAME_INTERVAL_MS).await;
        }
    }
}
