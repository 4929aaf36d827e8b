//! CLI mode implementations

mod list;
mod lookup;
mod series;

pub use list::run_list;
pub use lookup::run_lookup;
pub use series::run_series;

use serde::Serialize;

/// Pretty JSON for stdout
fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Failed to encode JSON: {}", e))
}

/// Report a saved chart, or the reason it could not be saved
fn report_chart(result: Result<(), String>, path: &str) -> Result<(), String> {
    result?;
    eprintln!("Chart saved to: {}", path);
    Ok(())
}
