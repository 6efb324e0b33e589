//! Board configuration
//!
//! Panel settings come from panel.toml, validated and expanded by build.rs.

use ili9488_driver::{Orientation, PanelConfig};

include!(concat!(env!("OUT_DIR"), "/panel_config.rs"));

/// Pause between test pattern frames
pub const FRAME_INTERVAL_MS: u64 = 1000;

/// Pause before retrying a failed bring-up
pub const INIT_RETRY_MS: u64 = 500;
