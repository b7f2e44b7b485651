//! Input normalization: turning loosely-specified seeds into palettes.
//!
//! Accepts named palette ids, single color tokens (hex, `rgb()`, CSS
//! names), comma-separated lists, and nested mixtures of those. Parsing is
//! total: unrecognized tokens are dropped, not reported.

use palette::Srgb;

use crate::brewer;
use crate::types::ColorSpec;

/// Normalizes a seed into an ordered palette.
///
/// * A known palette name resolves to that palette's swatch colors.
/// * A single color token resolves to a one-color palette.
/// * Comma-separated text splits on top-level commas only, so function
///   notation like `rgb(1,2,3)` stays one token. Tokens may be wrapped in
///   double quotes.
/// * Lists are normalized recursively and flattened in order.
///
/// Anything unrecognized contributes nothing to the result.
pub fn parse_colors(spec: &ColorSpec) -> Vec<Srgb<u8>> {
    match spec {
        ColorSpec::Text(text) => parse_text(text),
        ColorSpec::List(items) => items.iter().flat_map(parse_colors).collect(),
    }
}

fn parse_text(text: &str) -> Vec<Srgb<u8>> {
    let trimmed = text.trim();

    if let Some(swatch) = brewer::lookup(trimmed) {
        return swatch;
    }

    if let Some(color) = parse_color_token(trimmed) {
        return vec![color];
    }

    if trimmed.contains(',') {
        return split_top_level(trimmed)
            .into_iter()
            .filter_map(|token| parse_color_token(strip_quotes(token)))
            .collect();
    }

    Vec::new()
}

/// Parses a single color token.
///
/// Accepted forms: `#rrggbb` / `rrggbb` / `#rgb` / `rgb` hex, `rgb(r,g,b)`
/// and `rgba(r,g,b,a)` function notation (the alpha component is ignored),
/// and CSS color names.
pub fn parse_color_token(token: &str) -> Option<Srgb<u8>> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    if let Ok(color) = token.parse::<Srgb<u8>>() {
        return Some(color);
    }

    let lower = token.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_rgb_args(args, 4);
    }
    if let Some(args) = lower
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_rgb_args(args, 3);
    }

    palette::named::from_str(&lower)
}

/// Formats a color as its canonical lowercase `#rrggbb` serialization.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Splits on commas outside parentheses. Empty pieces are kept; the caller
/// drops them when token parsing fails.
fn split_top_level(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, ch) in input.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&input[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

fn strip_quotes(token: &str) -> &str {
    let trimmed = token.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed)
}

fn parse_rgb_args(args: &str, expected: usize) -> Option<Srgb<u8>> {
    let components: Vec<&str> = args.split(',').map(str::trim).collect();
    if components.len() != expected {
        return None;
    }

    let channel = |index: usize| -> Option<u8> {
        components[index]
            .parse::<u16>()
            .ok()
            .filter(|&value| value <= 255)
            .map(|value| value as u8)
    };

    Some(Srgb::new(channel(0)?, channel(1)?, channel(2)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_tokens_parse_with_and_without_hash() {
        assert_eq!(parse_color_token("#ff0000"), Some(Srgb::new(255, 0, 0)));
        assert_eq!(parse_color_token("00ff00"), Some(Srgb::new(0, 255, 0)));
        assert_eq!(parse_color_token("#F00"), Some(Srgb::new(255, 0, 0)));
    }

    #[test]
    fn named_tokens_parse_case_insensitively() {
        assert_eq!(parse_color_token("red"), Some(Srgb::new(255, 0, 0)));
        assert_eq!(parse_color_token("Blue"), Some(Srgb::new(0, 0, 255)));
    }

    #[test]
    fn rgb_function_tokens_parse() {
        assert_eq!(
            parse_color_token("rgb(12, 34, 56)"),
            Some(Srgb::new(12, 34, 56))
        );
        assert_eq!(
            parse_color_token("RGBA(1,2,3,0.5)"),
            Some(Srgb::new(1, 2, 3))
        );
        assert_eq!(parse_color_token("rgb(300,0,0)"), None);
        assert_eq!(parse_color_token("rgb(1,2)"), None);
    }

    #[test]
    fn garbage_tokens_parse_to_none() {
        assert_eq!(parse_color_token(""), None);
        assert_eq!(parse_color_token("not a color"), None);
        assert_eq!(parse_color_token("#12345"), None);
    }

    #[test]
    fn splitting_respects_parentheses() {
        assert_eq!(
            split_top_level("rgb(1,2,3), #fff, blue"),
            vec!["rgb(1,2,3)", " #fff", " blue"]
        );
    }

    #[test]
    fn quotes_are_stripped_from_tokens() {
        assert_eq!(strip_quotes("\"#ff0000\""), "#ff0000");
        assert_eq!(strip_quotes(" plain "), "plain");
    }

    #[test]
    fn comma_lists_drop_invalid_tokens_silently() {
        let colors = parse_colors(&ColorSpec::from("red, nope, #0000ff"));
        assert_eq!(colors, vec![Srgb::new(255, 0, 0), Srgb::new(0, 0, 255)]);
    }

    #[test]
    fn nested_lists_flatten_in_order() {
        let spec = ColorSpec::from(vec!["#ff0000, #00ff00", "blue"]);
        let colors = parse_colors(&spec);
        assert_eq!(
            colors,
            vec![
                Srgb::new(255, 0, 0),
                Srgb::new(0, 255, 0),
                Srgb::new(0, 0, 255),
            ]
        );
    }

    #[test]
    fn unrecognized_text_parses_to_empty() {
        assert!(parse_colors(&ColorSpec::from("")).is_empty());
        assert!(parse_colors(&ColorSpec::from("no such palette")).is_empty());
    }

    #[test]
    fn hex_serialization_is_lowercase_with_hash() {
        assert_eq!(to_hex(Srgb::new(255, 0, 170)), "#ff00aa");
        assert_eq!(to_hex(Srgb::new(0, 0, 0)), "#000000");
    }
}
