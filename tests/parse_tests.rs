//! Integration tests for seed parsing

mod common;

use common::{hex, hexes};
use palette_gen::{parse_color_token, parse_colors, to_hex, ColorSpec};

#[test]
fn single_tokens_parse_in_all_supported_forms() {
    for token in ["#ff8800", "ff8800", "rgb(255, 136, 0)"] {
        assert_eq!(
            parse_color_token(token),
            Some(hex("#ff8800")),
            "token {} did not parse",
            token
        );
    }
    assert_eq!(parse_color_token("#f80"), Some(hex("#ff8800")));
    assert_eq!(parse_color_token("hotpink"), Some(hex("#ff69b4")));
}

#[test]
fn comma_lists_keep_function_tokens_whole() {
    let colors = parse_colors(&ColorSpec::from("rgb(255,0,0), #00ff00, blue"));
    assert_eq!(
        hexes(&colors),
        vec!["#ff0000", "#00ff00", "#0000ff"]
    );
}

#[test]
fn quoted_tokens_are_unwrapped() {
    let colors = parse_colors(&ColorSpec::from("\"#ff0000\", \"blue\""));
    assert_eq!(hexes(&colors), vec!["#ff0000", "#0000ff"]);
}

#[test]
fn invalid_tokens_are_dropped_not_reported() {
    let colors = parse_colors(&ColorSpec::from("red, definitely-not-a-color, #00f"));
    assert_eq!(colors.len(), 2);
}

#[test]
fn brewer_names_resolve_to_their_swatches() {
    assert_eq!(parse_colors(&ColorSpec::from("Set3")).len(), 12);
    assert_eq!(parse_colors(&ColorSpec::from("set3")).len(), 12);
    assert_eq!(parse_colors(&ColorSpec::from("Spectral")).len(), 11);
}

#[test]
fn lists_flatten_recursively_in_order() {
    let spec = ColorSpec::List(vec![
        ColorSpec::from("Set2"),
        ColorSpec::from("#ff0000, #00ff00"),
        ColorSpec::List(vec![ColorSpec::from("blue")]),
    ]);
    let colors = parse_colors(&spec);
    assert_eq!(colors.len(), 11);
    assert_eq!(colors[8], hex("#ff0000"));
    assert_eq!(colors[10], hex("#0000ff"));
}

#[test]
fn empty_and_unrecognized_text_normalize_to_nothing() {
    assert!(parse_colors(&ColorSpec::from("")).is_empty());
    assert!(parse_colors(&ColorSpec::from("   ")).is_empty());
    assert!(parse_colors(&ColorSpec::from("Set99")).is_empty());
}

#[test]
fn rgba_alpha_is_ignored() {
    assert_eq!(parse_color_token("rgba(10,20,30,0.5)"), Some(hex("#0a141e")));
}

#[test]
fn hex_serialization_round_trips() {
    for code in ["#000000", "#ffffff", "#8dd3c7", "#0a141e"] {
        assert_eq!(to_hex(hex(code)), code);
    }
}
