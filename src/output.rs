use colored::*;

use vizpalette::palette::{ColorEntry, HexColor, Palette, is_auto_color};

const NAME_WIDTH: usize = 16;

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

/// Colored block showing the hex code in a readable foreground
pub(crate) fn swatch(hex: &str) -> ColoredString {
    let text = format!(" {} ", hex);
    match HexColor::parse(hex) {
        Ok(color) => {
            let (r, g, b) = color.rgb();
            let (fr, fg, fb) = HexColor::parse(color.contrast_text())
                .map(|c| c.rgb())
                .unwrap_or((255, 255, 255));
            text.as_str().truecolor(fr, fg, fb).on_truecolor(r, g, b)
        }
        Err(_) => text.as_str().normal(),
    }
}

pub(crate) fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

pub(crate) fn print_palette_header() {
    println!("{:>3}  {:<width$} {:<7}", "#", "NAME", "HEX", width = NAME_WIDTH);
    print_separator(3 + 2 + NAME_WIDTH + 1 + 7 + 10);
}

pub(crate) fn print_palette_row(index: usize, entry: &ColorEntry, auto: bool) {
    let name = format!("{:<width$}", entry.name, width = NAME_WIDTH);
    let marker = if auto { " auto" } else { "" };
    println!(
        "{:>3}  {} {} {}{}",
        index + 1,
        style_label(&name),
        entry.hex,
        swatch(entry.hex),
        marker.dimmed()
    );
}

pub(crate) fn print_palette(title: &str, palette: &Palette) {
    println!("[{}]", title);
    print_palette_header();
    for (i, entry) in palette.iter().enumerate() {
        print_palette_row(i, &entry, is_auto_color(entry.hex));
    }
}

pub(crate) fn print_entry(entry: &ColorEntry) {
    println!("{}: {} {}", style_label(entry.name), entry.hex, swatch(entry.hex));
}

pub(crate) fn print_series(colors: &[&str], cycle_len: usize) {
    println!("[Automatic Series Colors]");
    println!("{:>6}  {:<7}", "SERIES", "HEX");
    print_separator(6 + 2 + 7 + 10);
    for (i, hex) in colors.iter().enumerate() {
        if i > 0 && i % cycle_len == 0 {
            println!("{}", "  (cycle restarts)".dimmed());
        }
        println!("{:>6}  {} {}", i + 1, hex, swatch(hex));
    }
}

pub(crate) fn print_legend() {
    println!("auto: Used for automatic series coloring, in order");
    println!("Colors without the marker can only be picked by hand");
}
