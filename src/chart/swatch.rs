//! Swatch bar chart rendering (one full-height bar per color)

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisType, Color, ItemStyle, LineStyle, SplitLine, TextStyle},
    renderer::ImageFormat,
    series::Bar,
};

use super::colors::{COLOR_BACKGROUND, COLOR_GRID, COLOR_TEXT};
use super::{CHART_HEIGHT, CHART_WIDTH};

/// A single colored bar with its X-axis label
pub(super) struct Swatch {
    pub(super) label: String,
    pub(super) hex: &'static str,
}

/// Render swatches side by side as a PNG
pub(super) fn render_swatch_chart(
    swatches: &[Swatch],
    title: &str,
    subtitle: &str,
    output_path: &str,
) -> Result<(), String> {
    if swatches.is_empty() {
        return Err("No data to render".to_string());
    }

    let labels: Vec<String> = swatches.iter().map(|s| s.label.clone()).collect();

    // Dense charts get smaller axis labels
    let label_font_size = if swatches.len() <= 20 { 18.0 } else { 10.0 };

    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text(title)
                .subtext(subtitle)
                .left("center")
                .top("3%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(36))
                .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("3%")
                .bottom("5%")
                .top("15%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .boundary_gap(true)
                .data(labels)
                .axis_label(
                    AxisLabel::new()
                        .color(COLOR_TEXT)
                        .font_size(label_font_size),
                ),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .max(1)
                .axis_label(AxisLabel::new().show(false))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        );

    // Grid width is ~94% of chart (3% margins each side)
    let grid_width = (CHART_WIDTH as f64) * 0.94;
    let bar_width = grid_width / swatches.len() as f64 * 0.8;

    // One stacked series per swatch so each bar keeps its own color;
    // every other category gets a zero-height segment
    for (i, swatch) in swatches.iter().enumerate() {
        let data: Vec<f64> = (0..swatches.len())
            .map(|j| if i == j { 1.0 } else { 0.0 })
            .collect();

        chart = chart.series(
            Bar::new()
                .name(&swatch.label)
                .data(data)
                .stack("swatch")
                .bar_width(bar_width)
                .item_style(ItemStyle::new().color(swatch.hex)),
        );
    }

    // Render to PNG
    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))?;

    Ok(())
}
