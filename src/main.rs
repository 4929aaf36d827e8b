mod mode;
mod output;

use clap::Parser;

use output::print_error;
use vizpalette::chart::MAX_SERIES;
use vizpalette::palette::PaletteSet;

#[derive(Parser)]
#[command(
    name = "vizpalette",
    version,
    about = "Named chart colors: list, look up, preview and export the series palette",
    after_help = "Examples:
  vizpalette                                   List the full palette
  vizpalette --set base                        List the automatic colors only
  vizpalette \"Dark Blue\"                       Look up a color by name
  vizpalette --series 20                       Colors for the first 20 series
  vizpalette --json                            Export the palette as JSON
  vizpalette --set additional --image out.png  Render a swatch chart
  vizpalette --no-color                        Disable colored output"
)]
struct Args {
    /// Color name to look up (case-insensitive)
    name: Option<String>,

    /// Which colors to list
    #[arg(short, long, value_enum, value_name = "SET")]
    set: Option<PaletteSet>,

    /// Show the automatic colors of the first N series
    #[arg(short = 'n', long, value_name = "N")]
    series: Option<usize>,

    /// Print JSON instead of a table
    #[arg(short, long)]
    json: bool,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output a swatch chart as PNG image (list and series modes only)
    #[arg(long, value_name = "PATH")]
    image: Option<String>,
}

fn validate(args: &Args) -> Result<(), String> {
    if args.name.is_some() && args.series.is_some() {
        return Err("--series cannot be used with a color name".to_string());
    }

    if args.name.is_some() && args.set.is_some() {
        return Err("--set cannot be used with a color name".to_string());
    }

    if args.series.is_some() && args.set.is_some() {
        return Err("--set cannot be used with --series".to_string());
    }

    if args.name.is_some() && args.image.is_some() {
        return Err("--image can only be used when listing colors or with --series".to_string());
    }

    if let Some(count) = args.series
        && !(1..=MAX_SERIES).contains(&count)
    {
        return Err(format!("--series must be between 1 and {}", MAX_SERIES));
    }

    // Validate image output path
    if let Some(ref path) = args.image {
        use std::path::Path;
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            return Err(format!("Directory does not exist: {}", parent.display()));
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = validate(&args) {
        print_error(&e);
        std::process::exit(1);
    }

    // Dispatch to appropriate mode
    let result = if let Some(ref name) = args.name {
        mode::run_lookup(name, args.json, args.quiet)
    } else if let Some(count) = args.series {
        mode::run_series(count, args.json, args.quiet, args.image.as_deref())
    } else {
        mode::run_list(
            args.set.unwrap_or_default(),
            args.json,
            args.quiet,
            args.image.as_deref(),
        )
    };

    if let Err(e) = result {
        print_error(&e);
        std::process::exit(1);
    }
}
