//! Named colors for chart series
//!
//! Base colors drive automatic series coloring; additional colors are only
//! offered for manual selection. The merged palette combines both, with
//! additional colors taking precedence on a name collision.

mod hex;
#[cfg(test)]
mod tests;

pub use hex::{HexColor, HexColorError};

use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::Serialize;

/// A single named color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorEntry {
    pub name: &'static str,
    pub hex: &'static str,
}

const fn entry(name: &'static str, hex: &'static str) -> ColorEntry {
    ColorEntry { name, hex }
}

/// Colors used when a series is set to "Automatic"
const BASE_COLORS: [ColorEntry; 14] = [
    entry("Dark Blue", "#1D4289"),
    entry("Light Blue", "#41B6E6"),
    entry("Dark Green", "#007A78"),
    entry("Light Green", "#94CCC7"),
    entry("Rose", "#BE84A3"),
    entry("Purple", "#5D3754"),
    entry("Yellow", "#FFC845"),
    entry("Orange", "#DC582A"),
    entry("Red", "#D3273E"),
    entry("Beige", "#A8A59A"),
    entry("Black", "#000000"),
    entry("Grey-Blue", "#83A3BF"),
    entry("Sand", "#E2B063"),
    entry("Cyan", "#47DAE5"),
];

/// Extra colors the user can pick by hand
const ADDITIONAL_COLORS: [ColorEntry; 6] = [
    entry("Indian Red", "#981717"),
    entry("Green 2", "#17BF51"),
    entry("Green 3", "#049235"),
    entry("Dark Turquoise", "#00B6EB"),
    entry("Dark Violet", "#A58AFF"),
    entry("Pink 2", "#C63FA9"),
];

static BASE: LazyLock<Palette> = LazyLock::new(|| Palette::from_entries(&BASE_COLORS));
static ADDITIONAL: LazyLock<Palette> =
    LazyLock::new(|| Palette::from_entries(&ADDITIONAL_COLORS));
static MERGED: LazyLock<Palette> = LazyLock::new(|| BASE.merge(&ADDITIONAL));
static COLOR_PALETTE_ARRAY: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| BASE.values().collect());

/// Ordered name -> hex mapping with unique names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    colors: IndexMap<&'static str, &'static str>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a palette from entries; a repeated name keeps its first
    /// position and takes the later value
    pub fn from_entries(entries: &[ColorEntry]) -> Self {
        Self {
            colors: entries.iter().map(|e| (e.name, e.hex)).collect(),
        }
    }

    /// Insert or override a color. Overriding keeps the original position.
    pub fn insert(&mut self, name: &'static str, hex: &'static str) {
        self.colors.insert(name, hex);
    }

    /// New palette with `overlay` applied on top of `self`
    pub fn merge(&self, overlay: &Palette) -> Palette {
        let mut merged = self.clone();
        merged.colors.extend(&overlay.colors);
        merged
    }

    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.colors.get(name).copied()
    }

    /// Exact match first, then an ASCII case-insensitive one
    pub fn find(&self, name: &str) -> Option<ColorEntry> {
        self.colors
            .get_key_value(name)
            .or_else(|| {
                self.colors
                    .iter()
                    .find(|(n, _)| n.eq_ignore_ascii_case(name))
            })
            .map(|(&name, &hex)| entry(name, hex))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ColorEntry> + '_ {
        self.colors.iter().map(|(&name, &hex)| entry(name, hex))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.colors.keys().copied()
    }

    pub fn values(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.colors.values().copied()
    }
}

/// Hex value of the named color
///
/// # Panics
///
/// Panics if no color has that exact name. Use [`Palette::get`] or
/// [`lookup`] when the name may be missing.
impl std::ops::Index<&str> for Palette {
    type Output = str;

    fn index(&self, name: &str) -> &str {
        match self.get(name) {
            Some(hex) => hex,
            None => panic!("no color named {:?}", name),
        }
    }
}

/// Which group of colors to work with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PaletteSet {
    Base,
    Additional,
    #[default]
    Merged,
}

impl PaletteSet {
    pub fn title(self) -> &'static str {
        match self {
            PaletteSet::Base => "Base Colors",
            PaletteSet::Additional => "Additional Colors",
            PaletteSet::Merged => "Color Palette",
        }
    }
}

/// The fixed base palette (14 colors)
pub fn base_colors() -> &'static Palette {
    &BASE
}

/// The fixed additional palette (6 colors)
pub fn additional_colors() -> &'static Palette {
    &ADDITIONAL
}

/// Base hex values in palette order, used for automatic coloring
pub fn color_palette_array() -> &'static [&'static str] {
    &COLOR_PALETTE_ARRAY
}

/// Base colors overlaid with additional colors
pub fn merged_palette() -> &'static Palette {
    &MERGED
}

pub fn palette_for(set: PaletteSet) -> &'static Palette {
    match set {
        PaletteSet::Base => base_colors(),
        PaletteSet::Additional => additional_colors(),
        PaletteSet::Merged => merged_palette(),
    }
}

/// Look up a color by name in the merged palette
pub fn lookup(name: &str) -> Option<ColorEntry> {
    merged_palette().find(name)
}

/// Automatic color for the series at `index`; cycles through the base colors
pub fn auto_color(index: usize) -> &'static str {
    let colors = color_palette_array();
    colors[index % colors.len()]
}

/// Whether a hex value takes part in automatic series coloring
pub fn is_auto_color(hex: &str) -> bool {
    color_palette_array().iter().any(|&c| c == hex)
}

/// Automatic colors for the first `count` series
pub fn auto_colors(count: usize) -> Vec<&'static str> {
    (0..count).map(auto_color).collect()
}
