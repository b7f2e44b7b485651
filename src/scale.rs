//! Gradient sampling in perceptual color spaces.
//!
//! Anchors are positioned evenly on `[0, 1]`; sampling interpolates the
//! bracketing pair. Plain gradients interpolate in LCH (hue mixed along the
//! shortest arc), bezier scales interpolate through all anchors at once in
//! Lab and can re-parameterize themselves so lightness progresses linearly.

use palette::{Clamp, FromColor, Lab, Lch, Mix, Srgb};

/// Samples `count` colors from an LCH gradient through `anchors`.
///
/// Sampling positions are `i / (count - 1)`; a single sample reads the
/// gradient midpoint. Empty anchors yield an empty palette, a single
/// anchor a constant one.
pub fn lch_gradient(anchors: &[Srgb<u8>], count: usize) -> Vec<Srgb<u8>> {
    if count == 0 || anchors.is_empty() {
        return Vec::new();
    }
    if anchors.len() == 1 {
        return vec![anchors[0]; count];
    }

    let stops: Vec<Lch> = anchors
        .iter()
        .map(|&anchor| Lch::from_color(anchor.into_format::<f32>()))
        .collect();

    sample_positions(count)
        .map(|position| {
            let mixed = sample_stops(&stops, position);
            Srgb::from_color(mixed).clamp().into_format()
        })
        .collect()
}

/// Samples `count` colors from a bezier curve through `anchors` in Lab,
/// re-parameterized so lightness progresses linearly from the first anchor
/// to the last.
pub fn bezier_scale(anchors: &[Srgb<u8>], count: usize) -> Vec<Srgb<u8>> {
    if count == 0 || anchors.is_empty() {
        return Vec::new();
    }
    if anchors.len() == 1 {
        return vec![anchors[0]; count];
    }

    let controls: Vec<Lab> = anchors
        .iter()
        .map(|&anchor| Lab::from_color(anchor.into_format::<f32>()))
        .collect();
    let light_start = controls[0].l;
    let light_end = controls[controls.len() - 1].l;

    sample_positions(count)
        .map(|position| {
            let target = light_start + (light_end - light_start) * position;
            let parameter =
                parameter_for_lightness(&controls, target, light_end >= light_start, position);
            let point = bezier_point(&controls, parameter);
            Srgb::from_color(point).clamp().into_format()
        })
        .collect()
}

fn sample_positions(count: usize) -> impl Iterator<Item = f32> {
    (0..count).map(move |index| {
        if count == 1 {
            0.5
        } else {
            index as f32 / (count - 1) as f32
        }
    })
}

fn sample_stops(stops: &[Lch], position: f32) -> Lch {
    let scaled = position.clamp(0.0, 1.0) * (stops.len() - 1) as f32;
    let index = (scaled.floor() as usize).min(stops.len() - 2);
    let local = scaled - index as f32;
    stops[index].mix(stops[index + 1], local)
}

/// De Casteljau evaluation of the bezier curve through `controls`.
fn bezier_point(controls: &[Lab], parameter: f32) -> Lab {
    let mut points = controls.to_vec();
    for level in (1..points.len()).rev() {
        for index in 0..level {
            points[index] = points[index].mix(points[index + 1], parameter);
        }
    }
    points[0]
}

/// Finds the curve parameter whose lightness matches `target`, assuming
/// lightness runs monotonically between the curve endpoints. Bounded
/// bisection from `initial`; close-enough initial guesses short-circuit.
fn parameter_for_lightness(controls: &[Lab], target: f32, ascending: bool, initial: f32) -> f32 {
    const TOLERANCE: f32 = 1e-2;

    let mut parameter = initial;
    let mut low = 0.0f32;
    let mut high = 1.0f32;

    for _ in 0..20 {
        let lightness = bezier_point(controls, parameter).l;
        if (lightness - target).abs() < TOLERANCE {
            break;
        }
        let overshot = if ascending {
            lightness > target
        } else {
            lightness < target
        };
        if overshot {
            high = parameter;
        } else {
            low = parameter;
        }
        parameter = 0.5 * (low + high);
    }
    parameter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_hits_anchor_endpoints() {
        let anchors = [Srgb::new(0u8, 0, 0), Srgb::new(255u8, 255, 255)];
        let ramp = lch_gradient(&anchors, 5);
        assert_eq!(ramp.len(), 5);
        assert_eq!(ramp[0], anchors[0]);
        assert_eq!(ramp[4], anchors[1]);
    }

    #[test]
    fn single_anchor_repeats() {
        let anchors = [Srgb::new(10u8, 20, 30)];
        assert_eq!(lch_gradient(&anchors, 3), vec![anchors[0]; 3]);
        assert_eq!(bezier_scale(&anchors, 3), vec![anchors[0]; 3]);
    }

    #[test]
    fn empty_inputs_sample_to_nothing() {
        assert!(lch_gradient(&[], 4).is_empty());
        assert!(lch_gradient(&[Srgb::new(0u8, 0, 0)], 0).is_empty());
        assert!(bezier_scale(&[], 4).is_empty());
    }

    #[test]
    fn bezier_endpoints_stay_near_the_input_endpoints() {
        let anchors = [
            Srgb::new(0u8, 66, 157),
            Srgb::new(150u8, 255, 234),
            Srgb::new(255u8, 255, 224),
        ];
        let curve = bezier_scale(&anchors, 7);
        assert_eq!(curve.len(), 7);

        let close = |a: Srgb<u8>, b: Srgb<u8>| {
            (i16::from(a.red) - i16::from(b.red)).abs() <= 2
                && (i16::from(a.green) - i16::from(b.green)).abs() <= 2
                && (i16::from(a.blue) - i16::from(b.blue)).abs() <= 2
        };
        assert!(close(curve[0], anchors[0]));
        assert!(close(curve[6], anchors[2]));
    }
}
