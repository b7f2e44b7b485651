//! Named palette registry and scale-based palette lookup.
//!
//! Carries the ColorBrewer swatches (plus viridis) as published, keyed
//! case-insensitively by their conventional names. Swatches are the anchor
//! colors of a gradient; [`palette_from_brewer`] samples any number of
//! colors from an LCH interpolation through them.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use palette::Srgb;

use crate::parse;
use crate::scale;
use crate::types::ColorSpec;

// Qualitative sets.
const SET1: &[&str] = &[
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628", "#f781bf",
    "#999999",
];
const SET2: &[&str] = &[
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3",
];
const SET3: &[&str] = &[
    "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69", "#fccde5",
    "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f",
];
const DARK2: &[&str] = &[
    "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02", "#a6761d", "#666666",
];
const PAIRED: &[&str] = &[
    "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99", "#e31a1c", "#fdbf6f", "#ff7f00",
    "#cab2d6", "#6a3d9a", "#ffff99", "#b15928",
];
const ACCENT: &[&str] = &[
    "#7fc97f", "#beaed4", "#fdc086", "#ffff99", "#386cb0", "#f0027f", "#bf5b17", "#666666",
];
const PASTEL1: &[&str] = &[
    "#fbb4ae", "#b3cde3", "#ccebc5", "#decbe4", "#fed9a6", "#ffffcc", "#e5d8bd", "#fddaec",
    "#f2f2f2",
];
const PASTEL2: &[&str] = &[
    "#b3e2cd", "#fdcdac", "#cbd5e8", "#f4cae4", "#e6f5c9", "#fff2ae", "#f1e2cc", "#cccccc",
];

// Diverging sets.
const BRBG: &[&str] = &[
    "#543005", "#8c510a", "#bf812d", "#dfc27d", "#f6e8c3", "#f5f5f5", "#c7eae5", "#80cdc1",
    "#35978f", "#01665e", "#003c30",
];
const PRGN: &[&str] = &[
    "#40004b", "#762a83", "#9970ab", "#c2a5cf", "#e7d4e8", "#f7f7f7", "#d9f0d3", "#a6dba0",
    "#5aae61", "#1b7837", "#00441b",
];
const PIYG: &[&str] = &[
    "#8e0152", "#c51b7d", "#de77ae", "#f1b6da", "#fde0ef", "#f7f7f7", "#e6f5d0", "#b8e186",
    "#7fbc41", "#4d9221", "#276419",
];
const PUOR: &[&str] = &[
    "#7f3b08", "#b35806", "#e08214", "#fdb863", "#fee0b6", "#f7f7f7", "#d8daeb", "#b2abd2",
    "#8073ac", "#542788", "#2d004b",
];
const RDBU: &[&str] = &[
    "#67001f", "#b2182b", "#d6604d", "#f4a582", "#fddbc7", "#f7f7f7", "#d1e5f0", "#92c5de",
    "#4393c3", "#2166ac", "#053061",
];
const RDGY: &[&str] = &[
    "#67001f", "#b2182b", "#d6604d", "#f4a582", "#fddbc7", "#ffffff", "#e0e0e0", "#bababa",
    "#878787", "#4d4d4d", "#1a1a1a",
];
const RDYLBU: &[&str] = &[
    "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee090", "#ffffbf", "#e0f3f8", "#abd9e9",
    "#74add1", "#4575b4", "#313695",
];
const RDYLGN: &[&str] = &[
    "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#d9ef8b", "#a6d96a",
    "#66bd63", "#1a9850", "#006837",
];
const SPECTRAL: &[&str] = &[
    "#9e0142", "#d53e4f", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#e6f598", "#abdda4",
    "#66c2a5", "#3288bd", "#5e4fa2",
];

// Sequential sets.
const BLUES: &[&str] = &[
    "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5", "#08519c",
    "#08306b",
];
const GREENS: &[&str] = &[
    "#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45", "#006d2c",
    "#00441b",
];
const GREYS: &[&str] = &[
    "#ffffff", "#f0f0f0", "#d9d9d9", "#bdbdbd", "#969696", "#737373", "#525252", "#252525",
    "#000000",
];
const ORANGES: &[&str] = &[
    "#fff5eb", "#fee6ce", "#fdd0a2", "#fdae6b", "#fd8d3c", "#f16913", "#d94801", "#a63603",
    "#7f2704",
];
const PURPLES: &[&str] = &[
    "#fcfbfd", "#efedf5", "#dadaeb", "#bcbddc", "#9e9ac8", "#807dba", "#6a51a3", "#54278f",
    "#3f007d",
];
const REDS: &[&str] = &[
    "#fff5f0", "#fee0d2", "#fcbba1", "#fc9272", "#fb6a4a", "#ef3b2c", "#cb181d", "#a50f15",
    "#67000d",
];
const ORRD: &[&str] = &[
    "#fff7ec", "#fee8c8", "#fdd49e", "#fdbb84", "#fc8d59", "#ef6548", "#d7301f", "#b30000",
    "#7f0000",
];
const YLGNBU: &[&str] = &[
    "#ffffd9", "#edf8b1", "#c7e9b4", "#7fcdbb", "#41b6c4", "#1d91c0", "#225ea8", "#253494",
    "#081d58",
];
const YLORRD: &[&str] = &[
    "#ffffcc", "#ffeda0", "#fed976", "#feb24c", "#fd8d3c", "#fc4e2a", "#e31a1c", "#bd0026",
    "#800026",
];
const VIRIDIS: &[&str] = &[
    "#440154", "#482777", "#3f4a8a", "#31678e", "#26838f", "#1f9d8a", "#6cce5a", "#b6de2b",
    "#fee825",
];

static SWATCHES: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut swatches: HashMap<&'static str, &'static [&'static str]> = HashMap::new();

    swatches.insert("set1", SET1);
    swatches.insert("set2", SET2);
    swatches.insert("set3", SET3);
    swatches.insert("dark2", DARK2);
    swatches.insert("paired", PAIRED);
    swatches.insert("accent", ACCENT);
    swatches.insert("pastel1", PASTEL1);
    swatches.insert("pastel2", PASTEL2);

    swatches.insert("brbg", BRBG);
    swatches.insert("prgn", PRGN);
    swatches.insert("piyg", PIYG);
    swatches.insert("puor", PUOR);
    swatches.insert("rdbu", RDBU);
    swatches.insert("rdgy", RDGY);
    swatches.insert("rdylbu", RDYLBU);
    swatches.insert("rdylgn", RDYLGN);
    swatches.insert("spectral", SPECTRAL);

    swatches.insert("blues", BLUES);
    swatches.insert("greens", GREENS);
    swatches.insert("greys", GREYS);
    swatches.insert("oranges", ORANGES);
    swatches.insert("purples", PURPLES);
    swatches.insert("reds", REDS);
    swatches.insert("orrd", ORRD);
    swatches.insert("ylgnbu", YLGNBU);
    swatches.insert("ylorrd", YLORRD);
    swatches.insert("viridis", VIRIDIS);

    swatches
});

/// Resolves a palette name to its swatch colors. Lookup is
/// case-insensitive; `None` for unknown names.
pub fn lookup(name: &str) -> Option<Vec<Srgb<u8>>> {
    let key = name.trim().to_ascii_lowercase();
    let swatch = SWATCHES.get(key.as_str())?;
    Some(
        swatch
            .iter()
            .filter_map(|hex| hex.parse().ok())
            .collect(),
    )
}

/// All registered palette names, in no particular order.
pub fn names() -> impl Iterator<Item = &'static str> {
    SWATCHES.keys().copied()
}

/// Samples `count` colors from the palette the seed resolves to.
///
/// The seed may be a palette name or any color list the parser accepts;
/// the resolved colors anchor an LCH gradient that is sampled evenly.
/// An unresolvable seed or a zero count yields an empty palette.
pub fn palette_from_brewer(seed: impl Into<ColorSpec>, count: usize) -> Vec<Srgb<u8>> {
    if count == 0 {
        return Vec::new();
    }
    let anchors = parse::parse_colors(&seed.into());
    scale::lch_gradient(&anchors, count)
}
