//! Address window
//!
//! A window is the rectangle that subsequent memory writes fill, column by
//! column then row by row. Corners given out of order are swapped rather
//! than rejected, and no bounds checking is done against the panel size.

use ili9488_hal::{Error, HardwareAccess};

use crate::cmd;
use crate::driver::Ili9488;

/// Inclusive pixel rectangle, always normalized so that `x1 <= x2` and
/// `y1 <= y2`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    x1: u16,
    y1: u16,
    x2: u16,
    y2: u16,
}

impl Window {
    /// Create a window from two corners in any order
    pub const fn new(x1: u16, y1: u16, x2: u16, y2: u16) -> Self {
        let (x1, x2) = if x2 < x1 { (x2, x1) } else { (x1, x2) };
        let (y1, y2) = if y2 < y1 { (y2, y1) } else { (y1, y2) };
        Self { x1, y1, x2, y2 }
    }

    /// Window covering a `width` x `height` area from the origin
    ///
    /// Zero sizes are clamped to a single pixel.
    pub const fn full(width: u16, height: u16) -> Self {
        Self::new(0, 0, width.saturating_sub(1), height.saturating_sub(1))
    }

    /// Top-left and bottom-right corners
    pub const fn corners(&self) -> ((u16, u16), (u16, u16)) {
        ((self.x1, self.y1), (self.x2, self.y2))
    }

    /// Width in pixels (inclusive bounds)
    pub const fn width(&self) -> u32 {
        (self.x2 - self.x1) as u32 + 1
    }

    /// Height in pixels (inclusive bounds)
    pub const fn height(&self) -> u32 {
        (self.y2 - self.y1) as u32 + 1
    }

    /// Number of pixels covered
    pub const fn pixel_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// The `index`-th of `count` equal-width column bands, left to right
    ///
    /// The last band absorbs the remainder. A window narrower than `count`
    /// columns only has `width()` bands; `None` past the last one.
    pub const fn column_band(&self, index: u32, count: u32) -> Option<Window> {
        let count = if count < self.width() { count } else { self.width() };
        if index >= count {
            return None;
        }

        let band = self.width() / count;
        let x1 = self.x1 as u32 + band * index;
        let x2 = if index + 1 == count {
            self.x2 as u32
        } else {
            x1 + band - 1
        };
        Some(Window::new(x1 as u16, self.y1, x2 as u16, self.y2))
    }

    /// CASET parameters: start and end column, big-endian
    pub const fn column_params(&self) -> [u8; 4] {
        span_params(self.x1, self.x2)
    }

    /// PASET parameters: start and end row, big-endian
    pub const fn row_params(&self) -> [u8; 4] {
        span_params(self.y1, self.y2)
    }
}

const fn span_params(start: u16, end: u16) -> [u8; 4] {
    let s = start.to_be_bytes();
    let e = end.to_be_bytes();
    [s[0], s[1], e[0], e[1]]
}

impl<H: HardwareAccess> Ili9488<H> {
    /// Select the rectangle the next [`draw`](Self::draw) fills
    ///
    /// Sends CASET, PASET and RAMWR. Must be called immediately before the
    /// matching draw.
    pub fn set_window(&mut self, x1: u16, y1: u16, x2: u16, y2: u16) -> Result<(), Error> {
        self.set_window_area(Window::new(x1, y1, x2, y2))
    }

    /// Typed form of [`set_window`](Self::set_window)
    pub fn set_window_area(&mut self, window: Window) -> Result<(), Error> {
        self.write_command(cmd::CASET, &window.column_params())?;
        self.write_command(cmd::PASET, &window.row_params())?;
        self.send_command(cmd::RAMWR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PanelConfig;
    use crate::mock::{MockHardware, Write};
    use proptest::prelude::*;

    fn issued(x1: u16, y1: u16, x2: u16, y2: u16) -> Vec<Write> {
        let mut lcd = Ili9488::new(MockHardware::new(), PanelConfig::default());
        lcd.set_window(x1, y1, x2, y2).unwrap();
        lcd.release().writes()
    }

    #[test]
    fn test_normalization() {
        let w = Window::new(5, 10, 2, 20);
        assert_eq!(w.corners(), ((2, 10), (5, 20)));

        let w = Window::new(100, 300, 0, 0);
        assert_eq!(w.corners(), ((0, 0), (100, 300)));
    }

    #[test]
    fn test_dimensions() {
        let w = Window::new(10, 20, 19, 20);
        assert_eq!(w.width(), 10);
        assert_eq!(w.height(), 1);
        assert_eq!(w.pixel_count(), 10);

        let full = Window::full(480, 320);
        assert_eq!(full.corners(), ((0, 0), (479, 319)));
        assert_eq!(full.pixel_count(), 480 * 320);

        // Widest possible window does not overflow
        let max = Window::new(0, 0, u16::MAX, u16::MAX);
        assert_eq!(max.width(), 65536);
        assert_eq!(max.height(), 65536);
        assert_eq!(max.pixel_count(), 1 << 32);
    }

    #[test]
    fn test_column_bands() {
        let full = Window::full(480, 320);
        let bands: Vec<_> = (0..3).map(|i| full.column_band(i, 3).unwrap()).collect();
        assert_eq!(
            bands,
            vec![
                Window::new(0, 0, 159, 319),
                Window::new(160, 0, 319, 319),
                Window::new(320, 0, 479, 319),
            ]
        );
        assert_eq!(full.column_band(3, 3), None);

        // Remainder goes to the last band
        assert_eq!(full.column_band(6, 7), Some(Window::new(408, 0, 479, 319)));

        // Offset windows stay inside their own columns
        let w = Window::new(10, 5, 19, 6);
        assert_eq!(w.column_band(1, 2), Some(Window::new(15, 5, 19, 6)));
    }

    #[test]
    fn test_column_bands_more_than_width() {
        let narrow = Window::new(0, 0, 1, 0);
        assert_eq!(narrow.column_band(0, 5), Some(Window::new(0, 0, 0, 0)));
        assert_eq!(narrow.column_band(1, 5), Some(Window::new(1, 0, 1, 0)));
        assert_eq!(narrow.column_band(2, 5), None);

        assert_eq!(Window::full(480, 320).column_band(0, 0), None);
    }

    #[test]
    fn test_params_big_endian() {
        let w = Window::new(0x0102, 0x0304, 0x01DF, 0x013F);
        assert_eq!(w.column_params(), [0x01, 0x02, 0x01, 0xDF]);
        assert_eq!(w.row_params(), [0x01, 0x3F, 0x03, 0x04]);
    }

    #[test]
    fn test_set_window_sequence() {
        assert_eq!(
            issued(0, 0, 479, 319),
            vec![
                Write::Command(0x2A),
                Write::Data(0x00),
                Write::Data(0x00),
                Write::Data(0x01),
                Write::Data(0xDF),
                Write::Command(0x2B),
                Write::Data(0x00),
                Write::Data(0x00),
                Write::Data(0x01),
                Write::Data(0x3F),
                Write::Command(0x2C),
            ]
        );
    }

    #[test]
    fn test_swapped_x_matches_ordered() {
        assert_eq!(issued(5, 10, 2, 20), issued(2, 10, 5, 20));
    }

    #[test]
    fn test_set_window_aborts_on_failure() {
        // 6th transmit is the PASET command
        let mut lcd = Ili9488::new(
            MockHardware::failing_on(6, Error::Timeout),
            PanelConfig::default(),
        );
        assert_eq!(lcd.set_window(0, 0, 10, 10), Err(Error::Timeout));

        let hw = lcd.release();
        assert_eq!(hw.transmit_count(), 6);
        assert_eq!(hw.writes().last(), Some(&Write::Command(0x2B)));
    }

    proptest! {
        #[test]
        fn prop_set_window_idempotent(x1 in any::<u16>(), y1 in any::<u16>(), x2 in any::<u16>(), y2 in any::<u16>()) {
            prop_assert_eq!(issued(x1, y1, x2, y2), issued(x1, y1, x2, y2));
        }

        #[test]
        fn prop_corner_order_irrelevant(x1 in any::<u16>(), y1 in any::<u16>(), x2 in any::<u16>(), y2 in any::<u16>()) {
            prop_assert_eq!(issued(x1, y1, x2, y2), issued(x2, y2, x1, y1));
            prop_assert_eq!(issued(x1, y1, x2, y2), issued(x2, y1, x1, y2));
        }

        #[test]
        fn prop_window_is_normalized(x1 in any::<u16>(), y1 in any::<u16>(), x2 in any::<u16>(), y2 in any::<u16>()) {
            let ((a, b), (c, d)) = Window::new(x1, y1, x2, y2).corners();
            prop_assert!(a <= c);
            prop_assert!(b <= d);
            prop_assert_eq!(Window::new(a, b, c, d), Window::new(x1, y1, x2, y2));
        }

        #[test]
        fn prop_column_bands_tile_window(x1 in any::<u16>(), x2 in any::<u16>(), count in 1u32..600) {
            let w = Window::new(x1, 0, x2, 9);
            let mut next = u32::from(w.corners().0 .0);
            let mut covered = 0u64;
            let mut i = 0;
            while let Some(band) = w.column_band(i, count) {
                let ((bx1, by1), (bx2, by2)) = band.corners();
                prop_assert_eq!(u32::from(bx1), next);
                prop_assert_eq!((by1, by2), (0, 9));
                next = u32::from(bx2) + 1;
                covered += band.pixel_count();
                i += 1;
            }
            prop_assert_eq!(covered, w.pixel_count());
        }
    }
}
