//! Shared helpers for palette-gen integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::Srgb;

/// Parse a hex literal, panicking on typos in the test itself
pub fn hex(code: &str) -> Srgb<u8> {
    code.parse()
        .unwrap_or_else(|_| panic!("bad hex literal in test: {}", code))
}

/// Render a palette back to hex strings for readable assertions
pub fn hexes(palette: &[Srgb<u8>]) -> Vec<String> {
    palette.iter().map(|&color| palette_gen::to_hex(color)).collect()
}

/// Compare two colors channel-wise with an integer tolerance
pub fn colors_close(a: Srgb<u8>, b: Srgb<u8>, tolerance: i16) -> bool {
    (i16::from(a.red) - i16::from(b.red)).abs() <= tolerance
        && (i16::from(a.green) - i16::from(b.green)).abs() <= tolerance
        && (i16::from(a.blue) - i16::from(b.blue)).abs() <= tolerance
}
