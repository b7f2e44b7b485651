//! Core types for palette construction and adjustment.

use thiserror::Error;

/// A form of color vision deficiency that colors can be simulated under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deficiency {
    /// Red-blind vision (missing L cones).
    Protanopia,

    /// Green-blind vision (missing M cones, the most common form).
    Deuteranopia,

    /// Blue-blind vision (missing S cones, rare).
    Tritanopia,

    /// Total color blindness. Simulated for display, not used for repair.
    Achromatopsia,
}

impl Deficiency {
    /// All deficiency types, in simulation display order.
    pub const ALL: [Deficiency; 4] = [
        Deficiency::Protanopia,
        Deficiency::Deuteranopia,
        Deficiency::Tritanopia,
        Deficiency::Achromatopsia,
    ];

    /// Lowercase name, as accepted by [`FromStr`](core::str::FromStr).
    pub fn as_str(&self) -> &'static str {
        match self {
            Deficiency::Protanopia => "protanopia",
            Deficiency::Deuteranopia => "deuteranopia",
            Deficiency::Tritanopia => "tritanopia",
            Deficiency::Achromatopsia => "achromatopsia",
        }
    }
}

impl std::fmt::Display for Deficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Deficiency {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "protanopia" => Ok(Deficiency::Protanopia),
            "deuteranopia" => Ok(Deficiency::Deuteranopia),
            "tritanopia" => Ok(Deficiency::Tritanopia),
            "achromatopsia" => Ok(Deficiency::Achromatopsia),
            other => Err(PaletteError::UnknownDeficiency(other.to_string())),
        }
    }
}

/// A loosely-specified palette seed.
///
/// Callers rarely hold a clean color list: the seed may be a named palette
/// id, a single color token, a comma-joined list, or a nested mixture of
/// those. [`parse_colors`](crate::parse::parse_colors) normalizes any of
/// these into an ordered palette.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    /// A palette name, a single color token, or a comma-separated list.
    Text(String),

    /// A mixture of specs, flattened recursively in order.
    List(Vec<ColorSpec>),
}

impl From<&str> for ColorSpec {
    fn from(text: &str) -> Self {
        ColorSpec::Text(text.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(text: String) -> Self {
        ColorSpec::Text(text)
    }
}

impl<T: Into<ColorSpec>> From<Vec<T>> for ColorSpec {
    fn from(items: Vec<T>) -> Self {
        ColorSpec::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<&[&str]> for ColorSpec {
    fn from(items: &[&str]) -> Self {
        ColorSpec::List(items.iter().map(|&item| item.into()).collect())
    }
}

/// Errors from palette operations.
///
/// Most of the library is total: malformed tokens are dropped during
/// parsing and the adjustment engine degrades to "leave unchanged" instead
/// of failing. Only operations that need at least one color, plus name
/// lookups, can error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The operation requires at least one color.
    #[error("palette must contain at least one color")]
    EmptyPalette,

    /// The string does not name a known deficiency type.
    #[error("unknown color vision deficiency `{0}`")]
    UnknownDeficiency(String),
}
