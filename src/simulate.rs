//! Color vision deficiency simulation.
//!
//! Maps a color to its appearance for a dichromatic viewer using the HCIRN
//! confusion-point construction: the color's chromaticity is projected
//! along the viewer's confusion line onto the deficiency axis, then the
//! result is pulled toward the neutral axis as far as needed to stay in
//! gamut. The tables and matrices are fixed per deficiency type.
//! Achromatopsia reduces to luma.

use palette::Srgb;

use crate::types::Deficiency;

/// Confusion-point table for one dichromatic deficiency.
struct ConfusionTable {
    /// Confusion point chromaticity (x, y).
    cpu: f32,
    cpv: f32,
    /// Deficiency axis slope and y-intercept.
    am: f32,
    ayi: f32,
}

const PROTAN: ConfusionTable = ConfusionTable {
    cpu: 0.735,
    cpv: 0.265,
    am: 1.273463,
    ayi: -0.073894,
};
const DEUTAN: ConfusionTable = ConfusionTable {
    cpu: 1.14,
    cpv: -0.14,
    am: 0.968437,
    ayi: 0.003331,
};
const TRITAN: ConfusionTable = ConfusionTable {
    cpu: 0.171,
    cpv: -0.003,
    am: 0.062921,
    ayi: 0.292119,
};

const GAMMA: f32 = 2.2;

// White point chromaticity.
const WHITE_X: f32 = 0.312713;
const WHITE_Y: f32 = 0.329016;
const WHITE_Z: f32 = 0.358271;

/// Simulates how `color` appears under the given deficiency.
///
/// Deterministic and total: every input maps to an in-gamut color.
pub fn simulate(color: Srgb<u8>, deficiency: Deficiency) -> Srgb<u8> {
    match deficiency {
        Deficiency::Protanopia => simulate_dichromacy(color, &PROTAN),
        Deficiency::Deuteranopia => simulate_dichromacy(color, &DEUTAN),
        Deficiency::Tritanopia => simulate_dichromacy(color, &TRITAN),
        Deficiency::Achromatopsia => simulate_achromatopsia(color),
    }
}

/// Simulates `color` under every deficiency type.
///
/// Slot 0 carries the unmodified color; the remaining slots follow
/// [`Deficiency::ALL`] order.
pub fn simulate_color_blindness(color: Srgb<u8>) -> [Srgb<u8>; 5] {
    [
        color,
        simulate(color, Deficiency::Protanopia),
        simulate(color, Deficiency::Deuteranopia),
        simulate(color, Deficiency::Tritanopia),
        simulate(color, Deficiency::Achromatopsia),
    ]
}

fn simulate_achromatopsia(color: Srgb<u8>) -> Srgb<u8> {
    let encoded = color.into_format::<f32>();
    let luma = 0.299 * encoded.red + 0.587 * encoded.green + 0.114 * encoded.blue;
    Srgb::new(luma, luma, luma).into_format()
}

fn simulate_dichromacy(color: Srgb<u8>, table: &ConfusionTable) -> Srgb<u8> {
    let encoded = color.into_format::<f32>();
    let red = encoded.red.powf(GAMMA);
    let green = encoded.green.powf(GAMMA);
    let blue = encoded.blue.powf(GAMMA);

    let x = 0.430574 * red + 0.341550 * green + 0.178325 * blue;
    let y = 0.222015 * red + 0.706655 * green + 0.071330 * blue;
    let z = 0.020183 * red + 0.129553 * green + 0.939180 * blue;

    let sum = x + y + z;
    let (u, v) = if sum == 0.0 { (0.0, 0.0) } else { (x / sum, y / sum) };

    // Neutral grey of equal luminance.
    let neutral_x = WHITE_X * y / WHITE_Y;
    let neutral_z = WHITE_Z * y / WHITE_Y;

    // Confusion line through the color, intersected with the deficiency axis.
    let slope = if u < table.cpu {
        (table.cpv - v) / (table.cpu - u)
    } else {
        (v - table.cpv) / (u - table.cpu)
    };
    let intercept = v - u * slope;
    let projected_u = (table.ayi - intercept) / (slope - table.am);
    let projected_v = slope * projected_u + intercept;

    let sim_x = projected_u * y / projected_v;
    let sim_z = (1.0 - (projected_u + projected_v)) * y / projected_v;

    let (mut sim_red, mut sim_green, mut sim_blue) = xyz_to_rgb(sim_x, y, sim_z);
    let (shift_red, shift_green, shift_blue) = xyz_to_rgb(neutral_x - sim_x, 0.0, neutral_z - sim_z);

    // Shift toward neutral just far enough to bring all channels in gamut.
    let fit = |channel: f32, shift: f32| -> f32 {
        if shift == 0.0 {
            return 0.0;
        }
        let bound = if channel < 0.0 { 0.0 } else { 1.0 };
        let amount = (bound - channel) / shift;
        if !(0.0..=1.0).contains(&amount) {
            0.0
        } else {
            amount
        }
    };
    let adjust = fit(sim_red, shift_red)
        .max(fit(sim_green, shift_green))
        .max(fit(sim_blue, shift_blue));

    sim_red += adjust * shift_red;
    sim_green += adjust * shift_green;
    sim_blue += adjust * shift_blue;

    let encode = |channel: f32| channel.clamp(0.0, 1.0).powf(1.0 / GAMMA);
    Srgb::new(encode(sim_red), encode(sim_green), encode(sim_blue)).into_format()
}

fn xyz_to_rgb(x: f32, y: f32, z: f32) -> (f32, f32, f32) {
    (
        3.063218 * x - 1.393325 * y - 0.475802 * z,
        -0.969243 * x + 1.875966 * y + 0.041555 * z,
        0.067871 * x - 0.228834 * y + 1.069251 * z,
    )
}
