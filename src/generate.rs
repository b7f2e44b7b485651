//! Palette generators: hue ramps, color-theory spreads, greyscale fills,
//! golden-ratio accents, and bezier smoothing.

use palette::{Clamp, FromColor, Hsl, Lch, ShiftHue, Srgb};

use crate::adjust::{adjust_palette, AdjustOptions};
use crate::scale;
use crate::types::PaletteError;

/// One saturation boost step, in LCH chroma units.
const CHROMA_STEP: f32 = 18.0;

/// Golden ratio conjugate, as a fraction of the hue circle.
const GOLDEN_RATIO: f32 = 0.618_034;

/// Generators never hand out more colors than this from one seed.
const MAX_DYNAMIC_COLORS: usize = 20;

/// How [`dynamic_palette`] expands each base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicPaletteKind {
    /// Lightness ramps per base color.
    Hues,

    /// Complementary/analogous/triadic spreads per base color.
    Complementary,
}

/// Generates `count` variations of a seed color: the seed itself followed
/// by progressively lighter, slightly more saturated versions.
pub fn hues_from_color(color: Srgb<u8>, count: usize) -> Vec<Srgb<u8>> {
    if count == 0 {
        return Vec::new();
    }

    let mut colors = vec![color];
    for step in 1..count {
        let factor = 1.0 + step as f32 / count as f32;
        let mut hsl = Hsl::from_color(color.into_format::<f32>());
        hsl.lightness = (hsl.lightness * factor).clamp(0.0, 1.0);
        let mut lch = Lch::from_color(hsl);
        lch.chroma += CHROMA_STEP;
        colors.push(Srgb::from_color(lch).clamp().into_format());
    }
    colors
}

/// [`hues_from_color`], with the result routed through the
/// color-blindness adjustment engine.
pub fn hues_from_color_colorblind_safe(color: Srgb<u8>, count: usize) -> Vec<Srgb<u8>> {
    adjust_palette(&hues_from_color(color, count), &AdjustOptions::default())
}

/// Generates a color-theory palette around a seed: the seed, its
/// complementary, analogous pairs at ±30° multiples, and a triadic pair
/// when the analogous spread falls short. Truncated to `count`.
pub fn palette_from_color(color: Srgb<u8>, count: usize) -> Vec<Srgb<u8>> {
    if count == 0 {
        return Vec::new();
    }

    let base = Hsl::from_color(color.into_format::<f32>());
    let mut colors = vec![color];
    colors.push(hue_shifted(base, 180.0));

    let pairs = count.saturating_sub(2) / 2;
    for step in 1..=pairs {
        let degrees = (step * 30) as f32;
        colors.push(hue_shifted(base, degrees));
        colors.push(hue_shifted(base, -degrees));
    }

    if colors.len() < count {
        colors.push(hue_shifted(base, 120.0));
        colors.push(hue_shifted(base, -120.0));
    }

    colors.truncate(count);
    colors
}

/// [`palette_from_color`], with the result routed through the
/// color-blindness adjustment engine.
pub fn palette_from_color_colorblind_safe(color: Srgb<u8>, count: usize) -> Vec<Srgb<u8>> {
    adjust_palette(&palette_from_color(color, count), &AdjustOptions::default())
}

/// Builds a palette of exactly `size` colors from several base colors.
///
/// Each base color is expanded with the chosen generator, the expansions
/// are interleaved round-robin so every base stays represented early in
/// the palette, duplicates are removed first-wins, and the result is
/// truncated or padded with a greyscale ramp to `size`. Expansion is
/// capped at 20 generated colors; beyond that the greyscale fill takes
/// over.
pub fn dynamic_palette(
    base_colors: &[Srgb<u8>],
    kind: DynamicPaletteKind,
    size: usize,
) -> Vec<Srgb<u8>> {
    if size == 0 || base_colors.is_empty() {
        return Vec::new();
    }

    let effective = size.min(MAX_DYNAMIC_COLORS);
    let per_base = effective / base_colors.len();

    let sets: Vec<Vec<Srgb<u8>>> = base_colors
        .iter()
        .map(|&base| match kind {
            DynamicPaletteKind::Hues => hues_from_color(base, per_base + 1),
            DynamicPaletteKind::Complementary => palette_from_color(base, per_base + 1),
        })
        .collect();

    let mut colors = Vec::new();
    for index in 0..=per_base {
        for set in &sets {
            colors.push(set[index]);
        }
    }

    let mut unique: Vec<Srgb<u8>> = Vec::new();
    for color in colors {
        if !unique.contains(&color) {
            unique.push(color);
        }
    }

    if unique.len() > size {
        unique.truncate(size);
    } else {
        let missing = size - unique.len();
        unique.extend(greyscale_ramp(0, missing as i32 - 1, missing as u32));
    }
    unique
}

/// Generates an evenly spaced greyscale ramp: one `rgb(l,l,l)` entry per
/// index in `start..=end`, with `l = round(i / steps * 255)` clamped to
/// the channel range. Zero `steps` yields an empty ramp.
pub fn greyscale_ramp(start: i32, end: i32, steps: u32) -> Vec<Srgb<u8>> {
    if steps == 0 {
        return Vec::new();
    }

    (start..=end)
        .map(|index| {
            let level = (index as f32 / steps as f32 * 255.0)
                .round()
                .clamp(0.0, 255.0) as u8;
            Srgb::new(level, level, level)
        })
        .collect()
}

/// Returns the golden-ratio companion of a color: the hue rotated by the
/// golden-ratio fraction of the hue circle, at fixed saturation 0.75 and
/// lightness 0.5.
pub fn golden_color(color: Srgb<u8>) -> Srgb<u8> {
    let hue = Hsl::from_color(color.into_format::<f32>())
        .hue
        .into_positive_degrees();
    let rotated = (hue + GOLDEN_RATIO * 360.0) % 360.0;
    Srgb::from_color(Hsl::new(rotated, 0.75, 0.5))
        .clamp()
        .into_format()
}

/// Smooths a palette by passing it through a bezier curve in Lab space
/// with linear lightness progression, sampling back the same number of
/// colors.
///
/// # Errors
/// * `EmptyPalette` - the input has no colors
pub fn beautify_palette(colors: &[Srgb<u8>]) -> Result<Vec<Srgb<u8>>, PaletteError> {
    if colors.is_empty() {
        return Err(PaletteError::EmptyPalette);
    }
    Ok(scale::bezier_scale(colors, colors.len()))
}

fn hue_shifted(base: Hsl, degrees: f32) -> Srgb<u8> {
    Srgb::from_color(base.shift_hue(degrees))
        .clamp()
        .into_format()
}
