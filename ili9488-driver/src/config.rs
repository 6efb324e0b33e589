//! Panel configuration
//!
//! Built once at startup and handed to [`Ili9488::new`](crate::Ili9488::new).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Panel width in the controller's native (portrait) orientation
pub const NATIVE_WIDTH: u16 = 320;

/// Panel height in the controller's native (portrait) orientation
pub const NATIVE_HEIGHT: u16 = 480;

/// Scan orientation
///
/// Only affects the memory access control (MADCTL) byte. All variants
/// select BGR colour order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    /// 480 x 320, connector on the left
    #[default]
    Landscape,
    /// 480 x 320, rotated 180 degrees
    LandscapeFlipped,
    /// 320 x 480
    Portrait,
    /// 320 x 480, rotated 180 degrees
    PortraitFlipped,
}

impl Orientation {
    /// MADCTL register value
    pub const fn madctl(self) -> u8 {
        match self {
            Orientation::Landscape => 0xF8,
            Orientation::LandscapeFlipped => 0x3C,
            Orientation::Portrait => 0x5C,
            Orientation::PortraitFlipped => 0x9C,
        }
    }

    /// MADCTL value as a parameter slice for the init script
    pub const fn madctl_params(self) -> &'static [u8] {
        match self {
            Orientation::Landscape => &[0xF8],
            Orientation::LandscapeFlipped => &[0x3C],
            Orientation::Portrait => &[0x5C],
            Orientation::PortraitFlipped => &[0x9C],
        }
    }

    /// Whether rows and columns are exchanged (MV bit)
    pub const fn is_landscape(self) -> bool {
        matches!(self, Orientation::Landscape | Orientation::LandscapeFlipped)
    }
}

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PanelConfig {
    /// Scan orientation
    pub orientation: Orientation,
    /// Turn on display inversion during bring-up (INVON instead of INVOFF)
    pub invert_colors: bool,
}

impl PanelConfig {
    /// Create a config with the given orientation, no inversion
    pub const fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            invert_colors: false,
        }
    }

    /// Builder-style inversion toggle
    pub const fn with_inverted_colors(mut self, invert: bool) -> Self {
        self.invert_colors = invert;
        self
    }

    /// Visible width in pixels for the configured orientation
    pub const fn width(&self) -> u16 {
        if self.orientation.is_landscape() {
            NATIVE_HEIGHT
        } else {
            NATIVE_WIDTH
        }
    }

    /// Visible height in pixels for the configured orientation
    pub const fn height(&self) -> u16 {
        if self.orientation.is_landscape() {
            NATIVE_WIDTH
        } else {
            NATIVE_HEIGHT
        }
    }
}
