//! ILI9488 Hardware Access Layer
//!
//! This crate defines the capability set the panel driver depends on.
//! Board-support code implements [`HardwareAccess`] once; the driver in
//! `ili9488-driver` only ever talks to the panel through it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application / graphics layer           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ili9488-driver (command sequencing)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ili9488-hal (this crate - contract)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ SpiInterface  │       │ CallbackTable │
//! │ (embedded-hal)│       │ (fn pointers) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Types
//!
//! - [`HardwareAccess`] - the five capabilities (CS, D/C, RST, transmit, delay)
//! - [`PinState`] - logical line state, polarity is the implementer's concern
//! - [`Error`], [`Status`] - failure taxonomy and its numeric outcome form
//! - [`SpiInterface`] - adapter over `embedded-hal` 1.0 SPI, GPIO and delay
//! - [`CallbackTable`] - runtime table of optional function pointers

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod access;
pub mod callback;
pub mod error;
pub mod gpio;
pub mod spi;

// Re-export key types at crate root for convenience
pub use access::HardwareAccess;
pub use callback::CallbackTable;
pub use error::{Error, Status};
pub use gpio::PinState;
pub use spi::SpiInterface;
