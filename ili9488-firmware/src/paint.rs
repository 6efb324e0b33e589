//! Solid-colour fills for the bring-up pattern
//!
//! The panel runs in RGB666 mode, so every pixel is three bytes with the
//! colour in the upper six bits of each.

use ili9488_driver::{Error, HardwareAccess, Ili9488, Window};

/// Bytes per pixel in RGB666 mode
pub const BYTES_PER_PIXEL: usize = 3;

/// Pixels pushed per `draw` call
const CHUNK_PIXELS: usize = 160;

/// RGB666 pixel from 8-bit channels
pub const fn rgb(r: u8, g: u8, b: u8) -> [u8; BYTES_PER_PIXEL] {
    [r & 0xFC, g & 0xFC, b & 0xFC]
}

pub const BLACK: [u8; 3] = rgb(0x00, 0x00, 0x00);
pub const WHITE: [u8; 3] = rgb(0xFF, 0xFF, 0xFF);
pub const RED: [u8; 3] = rgb(0xFF, 0x00, 0x00);
pub const GREEN: [u8; 3] = rgb(0x00, 0xFF, 0x00);
pub const BLUE: [u8; 3] = rgb(0x00, 0x00, 0xFF);

/// Fill `window` with a single colour
///
/// Streams the window in fixed-size chunks and releases chip select once
/// the last chunk is out.
pub fn fill_window<H: HardwareAccess>(
    lcd: &mut Ili9488<H>,
    window: Window,
    colour: [u8; BYTES_PER_PIXEL],
) -> Result<(), Error> {
    let mut chunk = [0u8; CHUNK_PIXELS * BYTES_PER_PIXEL];
    for px in chunk.chunks_exact_mut(BYTES_PER_PIXEL) {
        px.copy_from_slice(&colour);
    }

    lcd.set_window_area(window)?;

    let mut remaining = window.pixel_count();
    while remaining > 0 {
        let n = remaining.min(CHUNK_PIXELS as u64) as usize;
        lcd.draw(&chunk[..n * BYTES_PER_PIXEL])?;
        remaining -= n as u64;
    }

    lcd.finish_draw()
}

/// Split the screen into vertical bands, one per colour
///
/// Colours beyond one per column are dropped.
pub fn vertical_bands<H: HardwareAccess>(
    lcd: &mut Ili9488<H>,
    colours: &[[u8; BYTES_PER_PIXEL]],
) -> Result<(), Error> {
    let screen = Window::full(lcd.width(), lcd.height());
    let count = colours.len() as u32;

    for (i, colour) in colours.iter().enumerate() {
        let Some(band) = screen.column_band(i as u32, count) else {
            break;
        };
        fill_window(lcd, band, *colour)?;
    }

    Ok(())
}
