//! Named color palette for chart series
//!
//! [`palette`] holds the color registry: base colors for automatic series
//! coloring, additional colors for manual selection, and the merged palette
//! used for lookup by name. [`chart`] renders PNG previews of them.

pub mod chart;
pub mod palette;

pub use palette::{
    ColorEntry, Palette, additional_colors, auto_color, base_colors, color_palette_array,
    merged_palette,
};
