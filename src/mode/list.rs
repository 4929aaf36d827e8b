//! Palette listing mode

use vizpalette::chart;
use vizpalette::palette::{PaletteSet, is_auto_color, palette_for};

use crate::output::{print_legend, print_palette};

use super::{report_chart, to_json};

/// List every color of the selected set
pub fn run_list(
    set: PaletteSet,
    json: bool,
    quiet: bool,
    image_path: Option<&str>,
) -> Result<(), String> {
    let palette = palette_for(set);

    if json {
        println!("{}", to_json(palette)?);
    } else {
        print_palette(set.title(), palette);

        if !quiet {
            println!();
            println!(
                "{} colors ({} automatic)",
                palette.len(),
                palette.values().filter(|hex| is_auto_color(hex)).count()
            );
            print_legend();
        }
    }

    if let Some(path) = image_path {
        report_chart(chart::render_palette_chart(palette, set.title(), path), path)?;
    }

    Ok(())
}
