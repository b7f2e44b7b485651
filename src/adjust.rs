//! Color-blindness adjustment of palettes.
//!
//! The engine simulates a palette under each dichromatic deficiency,
//! flags pairs of simulated colors that a viewer could not tell apart,
//! and repairs each flagged color by searching a bounded neighborhood of
//! hue/lightness/saturation shifts for the closest replacement that is
//! distinct from the rest of the simulated palette. The three
//! independently repaired variants are then reconciled per position by
//! nearest match to the unsimulated input.
//!
//! The repair is best-effort: when every candidate collides, the color is
//! left unchanged rather than failing.

use palette::color_difference::Ciede2000;
use palette::{Clamp, FromColor, Hsl, Lab, Lighten, Saturate, ShiftHue, Srgb};

use crate::parse;
use crate::simulate::simulate;
use crate::types::{ColorSpec, Deficiency};

/// Tuning knobs for the adjustment engine.
///
/// The defaults are a CIEDE2000 cutoff of 7 with replacement shifts
/// carried ~75% by hue, ~15% by lightness and ~10% by saturation. All
/// three are empirical accessibility tunings, not structural
/// requirements, so they are parameters rather than constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustOptions {
    /// Perceptual distance below which two simulated colors count as
    /// indistinguishable.
    pub similarity_threshold: f32,

    /// Lightness added to a replacement per full hue revolution.
    pub lightness_weight: f32,

    /// Saturation added to a replacement per full hue revolution.
    pub saturation_weight: f32,
}

impl Default for AdjustOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: 7.0,
            lightness_weight: 0.15,
            saturation_weight: 0.10,
        }
    }
}

/// Hue offsets evaluated by the repair search: 0°, 10°, ..., 350°.
///
/// The discrete step is observable behavior (ties resolve to the smallest
/// shift), so it is fixed rather than configurable.
const HUE_STEP: f32 = 10.0;
const HUE_CANDIDATES: usize = 36;

/// Deficiency types the repair pass runs against.
const REPAIR_TYPES: [Deficiency; 3] = [
    Deficiency::Protanopia,
    Deficiency::Deuteranopia,
    Deficiency::Tritanopia,
];

/// CIEDE2000 distance between two colors.
pub fn delta_e(a: Srgb<u8>, b: Srgb<u8>) -> f32 {
    let lab_a = Lab::from_color(a.into_format::<f32>());
    let lab_b = Lab::from_color(b.into_format::<f32>());
    lab_a.difference(lab_b)
}

/// True when two colors are closer than `threshold`.
///
/// Symmetric but not transitive: a palette has only pairwise similarity
/// flags, never a consistent "distinct" partition.
pub fn too_similar(a: Srgb<u8>, b: Srgb<u8>, threshold: f32) -> bool {
    delta_e(a, b) < threshold
}

/// Searches hue/lightness/saturation shifts of `original` for the closest
/// replacement that collides with no snapshot entry other than the one at
/// `skip` (the color being replaced).
///
/// All 36 hue offsets are always evaluated; among non-colliding candidates
/// the smallest correction wins, first-encountered on ties. When every
/// candidate collides the original is returned unchanged, which may still
/// be too similar; the caller accepts best-effort output.
pub fn resolve_similar(
    original: Srgb<u8>,
    snapshot: &[Srgb<u8>],
    skip: usize,
    options: &AdjustOptions,
) -> Srgb<u8> {
    let mut best = original;
    let mut min_difference = f32::INFINITY;

    for step in 0..HUE_CANDIDATES {
        let candidate = shifted_candidate(original, step as f32 * HUE_STEP, options);
        let collides = snapshot.iter().enumerate().any(|(index, other)| {
            index != skip && too_similar(candidate, *other, options.similarity_threshold)
        });
        if collides {
            continue;
        }
        let difference = delta_e(original, candidate);
        if difference < min_difference {
            min_difference = difference;
            best = candidate;
        }
    }

    best
}

/// Builds one repair candidate. The shift is dominated by hue; lightness
/// and saturation grow proportionally with it.
fn shifted_candidate(original: Srgb<u8>, hue_shift: f32, options: &AdjustOptions) -> Srgb<u8> {
    let revolution = hue_shift / 360.0;
    let shifted = Hsl::from_color(original.into_format::<f32>())
        .shift_hue(hue_shift)
        .lighten_fixed(options.lightness_weight * revolution)
        .saturate_fixed(options.saturation_weight * revolution)
        .clamp();
    Srgb::from_color(shifted).clamp().into_format()
}

/// Repairs a palette for a single deficiency type.
///
/// Every input color is simulated; a color is flagged when its simulated
/// value is too similar to the simulated value at any *other* index (two
/// distinct entries that render identically still flag each other).
/// Flagged positions are repaired against the simulated snapshot (never
/// against already-repaired values) and carry the repaired color in the
/// output; untouched positions carry the input color unchanged.
pub fn adjust_for_deficiency(
    palette: &[Srgb<u8>],
    deficiency: Deficiency,
    options: &AdjustOptions,
) -> Vec<Srgb<u8>> {
    let simulated: Vec<Srgb<u8>> = palette
        .iter()
        .map(|&color| simulate(color, deficiency))
        .collect();

    palette
        .iter()
        .enumerate()
        .map(|(index, &color)| {
            let flagged = simulated.iter().enumerate().any(|(other_index, other)| {
                other_index != index
                    && too_similar(simulated[index], *other, options.similarity_threshold)
            });
            if flagged {
                resolve_similar(simulated[index], &simulated, index, options)
            } else {
                color
            }
        })
        .collect()
}

/// Adjusts a palette so its colors stay distinguishable under the three
/// dichromatic deficiencies.
///
/// The palette is repaired independently per deficiency type, then the
/// three variants are merged: each output position takes whichever
/// candidate is perceptually closest to the input color at that position.
/// Length and order are always preserved, and a palette that is already
/// conflict-free under every simulation comes back unchanged.
pub fn adjust_palette(palette: &[Srgb<u8>], options: &AdjustOptions) -> Vec<Srgb<u8>> {
    let repaired: Vec<Vec<Srgb<u8>>> = REPAIR_TYPES
        .iter()
        .map(|&deficiency| adjust_for_deficiency(palette, deficiency, options))
        .collect();

    palette
        .iter()
        .enumerate()
        .map(|(index, &original)| {
            repaired
                .iter()
                .map(|variant| variant[index])
                .min_by(|a, b| delta_e(original, *a).total_cmp(&delta_e(original, *b)))
                .unwrap_or(original)
        })
        .collect()
}

/// Adjusts any palette seed the parser accepts, with default options.
///
/// A seed that normalizes to no colors yields an empty palette; there is
/// no error path.
pub fn adjust_for_color_blindness(seed: impl Into<ColorSpec>) -> Vec<Srgb<u8>> {
    adjust_for_color_blindness_with(seed, &AdjustOptions::default())
}

/// Adjusts any palette seed the parser accepts.
pub fn adjust_for_color_blindness_with(
    seed: impl Into<ColorSpec>,
    options: &AdjustOptions,
) -> Vec<Srgb<u8>> {
    let palette = parse::parse_colors(&seed.into());
    adjust_palette(&palette, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Srgb<u8> = Srgb::new(255, 0, 0);
    const NEAR_RED: Srgb<u8> = Srgb::new(255, 5, 5);
    const BLUE: Srgb<u8> = Srgb::new(0, 0, 255);

    #[test]
    fn identical_colors_are_too_similar() {
        assert!(too_similar(RED, RED, 7.0));
        assert!(too_similar(RED, NEAR_RED, 7.0));
    }

    #[test]
    fn distant_colors_are_not_too_similar() {
        assert!(!too_similar(RED, BLUE, 7.0));
        assert!(delta_e(RED, BLUE) >= 7.0);
    }

    #[test]
    fn delta_e_is_symmetric_and_zero_on_self() {
        assert_eq!(delta_e(RED, RED), 0.0);
        let forward = delta_e(RED, BLUE);
        let backward = delta_e(BLUE, RED);
        assert!((forward - backward).abs() < 1e-3);
    }

    #[test]
    fn repair_is_deterministic() {
        let snapshot = [RED, NEAR_RED, BLUE];
        let first = resolve_similar(RED, &snapshot, 0, &AdjustOptions::default());
        let second = resolve_similar(RED, &snapshot, 0, &AdjustOptions::default());
        assert_eq!(first, second);
    }

    #[test]
    fn repair_escapes_a_colliding_neighbor() {
        let snapshot = [RED, NEAR_RED];
        let options = AdjustOptions::default();
        let repaired = resolve_similar(RED, &snapshot, 0, &options);
        assert!(!too_similar(repaired, NEAR_RED, options.similarity_threshold));
    }

    #[test]
    fn repair_returns_the_original_when_every_candidate_collides() {
        // An absurd threshold makes every candidate collide with the
        // neighbor, so the search must degrade to a no-op.
        let options = AdjustOptions {
            similarity_threshold: 1000.0,
            ..AdjustOptions::default()
        };
        let snapshot = [RED, NEAR_RED];
        assert_eq!(resolve_similar(RED, &snapshot, 0, &options), RED);
    }

    #[test]
    fn zero_threshold_never_flags_anything() {
        let options = AdjustOptions {
            similarity_threshold: 0.0,
            ..AdjustOptions::default()
        };
        let palette = [RED, NEAR_RED];
        assert_eq!(adjust_palette(&palette, &options), palette.to_vec());
    }

    #[test]
    fn zero_hue_shift_candidate_reproduces_the_original() {
        let options = AdjustOptions::default();
        let candidate = shifted_candidate(Srgb::new(18, 52, 86), 0.0, &options);
        assert!(delta_e(candidate, Srgb::new(18, 52, 86)) < 1.0);
    }
}
