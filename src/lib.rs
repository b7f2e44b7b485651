#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ColorSpec`**: A loosely-specified palette seed (name, token, list, or nested mixture)
//! - **`parse_colors`**: Normalizes a seed into an ordered `Vec<Srgb<u8>>` palette
//! - **`Deficiency`**: The color vision deficiency types colors can be simulated under
//! - **`simulate`**: Maps one color to its appearance for a deficient viewer
//! - **`adjust_for_color_blindness`**: Repairs a palette so simulated colors stay distinguishable
//! - **`AdjustOptions`**: Similarity threshold and repair shift weights
//! - **`palette_from_brewer`**: Samples colors from a gradient through a named swatch
//!
//! The library uses `palette::Srgb<u8>` for all palette values; `to_hex`
//! produces the canonical `#rrggbb` serialization. All operations are pure,
//! synchronous, and stateless.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod adjust;
pub mod brewer;
pub mod generate;
pub mod parse;
pub mod scale;
pub mod simulate;
pub mod types;

pub use adjust::{
    adjust_for_color_blindness, adjust_for_color_blindness_with, adjust_for_deficiency,
    adjust_palette, delta_e, too_similar, AdjustOptions,
};
pub use brewer::palette_from_brewer;
pub use generate::{
    beautify_palette, dynamic_palette, golden_color, greyscale_ramp, hues_from_color,
    hues_from_color_colorblind_safe, palette_from_color, palette_from_color_colorblind_safe,
    DynamicPaletteKind,
};
pub use parse::{parse_color_token, parse_colors, to_hex};
pub use simulate::{simulate, simulate_color_blindness};
pub use types::{ColorSpec, Deficiency, PaletteError};
