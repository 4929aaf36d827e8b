//! PNG previews of palettes and series color cycles

mod colors;
mod swatch;

use crate::palette::{Palette, auto_color};

use swatch::{Swatch, render_swatch_chart};

/// Chart dimensions (2x for Retina quality)
pub(super) const CHART_WIDTH: u32 = 2800;
pub(super) const CHART_HEIGHT: u32 = 1200;

/// Maximum number of series shown in a series chart
pub const MAX_SERIES: usize = 100;

/// Render one swatch per palette entry to a PNG file
pub fn render_palette_chart(
    palette: &Palette,
    title: &str,
    output_path: &str,
) -> Result<(), String> {
    if palette.is_empty() {
        return Err("Palette has no colors to render".to_string());
    }

    let swatches: Vec<Swatch> = palette
        .iter()
        .map(|e| Swatch {
            label: format!("{}\n{}", e.name, e.hex),
            hex: e.hex,
        })
        .collect();

    let subtitle = format!("{} colors", palette.len());
    render_swatch_chart(&swatches, title, &subtitle, output_path)
}

/// Render the automatic colors of the first `count` series to a PNG file
pub fn render_series_chart(count: usize, output_path: &str) -> Result<(), String> {
    if count == 0 || count > MAX_SERIES {
        return Err(format!("Series chart requires 1-{} series", MAX_SERIES));
    }

    let swatches: Vec<Swatch> = (0..count)
        .map(|i| {
            let hex = auto_color(i);
            Swatch {
                label: format!("{}\n{}", i + 1, hex),
                hex,
            }
        })
        .collect();

    let subtitle = format!("{} series", count);
    render_swatch_chart(&swatches, "Automatic Series Colors", &subtitle, output_path)
}
