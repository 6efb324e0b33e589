//! Build script for ili9488-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates panel.toml and turns it into a `PanelConfig` constant

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use ili9488_driver::PanelConfig;
use serde::Deserialize;

/// Highest SPI clock the RP2040 peripheral can generate (clk_peri / 2)
const MAX_SPI_FREQUENCY_HZ: u32 = 62_500_000;

/// Layout of panel.toml
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PanelFile {
    #[serde(default)]
    panel: PanelConfig,
    spi: SpiSection,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SpiSection {
    frequency_hz: u32,
}

fn main() {
    setup_linker();
    generate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate panel.toml and emit `panel_config.rs` into OUT_DIR
fn generate_config() {
    println!("cargo:rerun-if-changed=panel.toml");

    let config_path = Path::new("panel.toml");
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: panel.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a panel.toml configuration file.          ║\n\
            ║  Please create one in the ili9488-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read panel.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let file: PanelFile = match toml::from_str(&content) {
        Ok(file) => file,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid panel.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    if file.spi.frequency_hz == 0 || file.spi.frequency_hz > MAX_SPI_FREQUENCY_HZ {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: [spi] frequency_hz must be 1-{:<28} ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            MAX_SPI_FREQUENCY_HZ
        );
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("panel_config.rs")).unwrap();
    writeln!(
        f,
        "pub const PANEL_CONFIG: PanelConfig = PanelConfig {{ orientation: Orientation::{:?}, invert_colors: {} }};",
        file.panel.orientation, file.panel.invert_colors
    )
    .unwrap();
    writeln!(
        f,
        "pub const SPI_FREQUENCY_HZ: u32 = {};",
        file.spi.frequency_hz
    )
    .unwrap();

    println!(
        "cargo:warning=panel.toml: {:?}, inverted={}, spi={} Hz",
        file.panel.orientation, file.panel.invert_colors, file.spi.frequency_hz
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
