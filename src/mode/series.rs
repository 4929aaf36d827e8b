//! Automatic series coloring mode

use vizpalette::chart;
use vizpalette::palette::{auto_colors, color_palette_array};

use crate::output::{print_series, print_warning};

use super::{report_chart, to_json};

/// Show the colors assigned to the first `count` series
pub fn run_series(
    count: usize,
    json: bool,
    quiet: bool,
    image_path: Option<&str>,
) -> Result<(), String> {
    let colors = auto_colors(count);
    let cycle_len = color_palette_array().len();

    if json {
        println!("{}", to_json(&colors)?);
    } else {
        if !quiet && count > cycle_len {
            print_warning(&format!(
                "only {} automatic colors, series {} onward reuse them",
                cycle_len,
                cycle_len + 1
            ));
        }
        print_series(&colors, cycle_len);
    }

    if let Some(path) = image_path {
        report_chart(chart::render_series_chart(count, path), path)?;
    }

    Ok(())
}
