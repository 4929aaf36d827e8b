//! Single color lookup mode

use vizpalette::palette::{color_palette_array, lookup};

use crate::output::print_entry;

use super::to_json;

/// Print the color registered under `name`
pub fn run_lookup(name: &str, json: bool, quiet: bool) -> Result<(), String> {
    let entry = lookup(name).ok_or_else(|| format!("Unknown color: {}", name))?;

    if json {
        println!("{}", to_json(&entry)?);
        return Ok(());
    }

    print_entry(&entry);

    if !quiet {
        match color_palette_array().iter().position(|&hex| hex == entry.hex) {
            Some(i) => println!(
                "Automatic color for series {} (repeats every {} series)",
                i + 1,
                color_palette_array().len()
            ),
            None => println!("Manual selection only"),
        }
    }

    Ok(())
}
