//! ILI9488 command bytes
//!
//! Fixed by the controller. Do not change.

pub const NOP: u8 = 0x00;
pub const SWRESET: u8 = 0x01;
pub const RDDID: u8 = 0x04;
pub const RDDST: u8 = 0x09;

/// Enter sleep mode
pub const SLPIN: u8 = 0x10;
/// Exit sleep mode
pub const SLPOUT: u8 = 0x11;
pub const PTLON: u8 = 0x12;
pub const NORON: u8 = 0x13;

pub const RDMODE: u8 = 0x0A;
pub const RDMADCTL: u8 = 0x0B;
pub const RDPIXFMT: u8 = 0x0C;
pub const RDIMGFMT: u8 = 0x0D;
pub const RDSELFDIAG: u8 = 0x0F;

/// Display inversion off
pub const INVOFF: u8 = 0x20;
/// Display inversion on
pub const INVON: u8 = 0x21;
pub const GAMMASET: u8 = 0x26;
pub const DISPOFF: u8 = 0x28;
pub const DISPON: u8 = 0x29;

/// Column address set
pub const CASET: u8 = 0x2A;
/// Page (row) address set
pub const PASET: u8 = 0x2B;
/// Memory write
pub const RAMWR: u8 = 0x2C;
pub const RAMRD: u8 = 0x2E;

pub const PTLAR: u8 = 0x30;
/// Memory access control (orientation)
pub const MADCTL: u8 = 0x36;
/// Interface pixel format
pub const PIXFMT: u8 = 0x3A;

/// Interface mode control
pub const IFMODE: u8 = 0xB0;
pub const FRMCTR1: u8 = 0xB1;
pub const FRMCTR2: u8 = 0xB2;
pub const FRMCTR3: u8 = 0xB3;
pub const INVCTR: u8 = 0xB4;
pub const DFUNCTR: u8 = 0xB6;

pub const PWCTR1: u8 = 0xC0;
pub const PWCTR2: u8 = 0xC1;
pub const PWCTR3: u8 = 0xC2;
pub const PWCTR4: u8 = 0xC3;
pub const PWCTR5: u8 = 0xC4;
pub const VMCTR1: u8 = 0xC5;
pub const VMCTR2: u8 = 0xC7;

pub const RDID1: u8 = 0xDA;
pub const RDID2: u8 = 0xDB;
pub const RDID3: u8 = 0xDC;
pub const RDID4: u8 = 0xDD;

/// Positive gamma correction
pub const GMCTRP1: u8 = 0xE0;
/// Negative gamma correction
pub const GMCTRN1: u8 = 0xE1;
/// Set image function
pub const SETIMAGE: u8 = 0xE9;
/// Adjust control 3
pub const ADJCTL3: u8 = 0xF7;
