//! ILI9488 panel driver
//!
//! Sequences register writes over a byte-serial bus to bring up an ILI9488
//! TFT controller, then exposes the two operations a graphics layer needs:
//! select a rectangular window and stream pixel data into it.
//!
//! All hardware access goes through [`HardwareAccess`]. The driver never
//! allocates and keeps no state between calls other than the contract and
//! its [`PanelConfig`].
//!
//! ```text
//! new(hw, config) -> init() -> { set_window(..) -> draw(..) -> finish_draw() }*
//! ```
//!
//! - [`cmd`] - controller command bytes
//! - [`config`] - orientation and panel configuration
//! - [`driver`] - transaction layer, bulk draw, display controls
//! - [`init`] - reset and register bring-up script
//! - [`window`] - column/row address window

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod cmd;
pub mod config;
pub mod driver;
pub mod init;
pub mod window;

#[cfg(test)]
mod mock;

pub use config::{Orientation, PanelConfig};
pub use driver::Ili9488;
pub use init::{init_script, InitStep};
pub use window::Window;

// Contract types, so callers only need this crate
pub use ili9488_hal::{Error, HardwareAccess, PinState, Status};
