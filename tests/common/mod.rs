//! Common test utilities

use std::path::Path;
use std::process::{Command, Output};

/// Run vizpalette with the given arguments
pub fn run_vizpalette(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vizpalette"))
        .args(args)
        .output()
        .expect("failed to execute vizpalette")
}

/// Run vizpalette and parse stdout as JSON
pub fn run_json(args: &[&str]) -> serde_json::Value {
    let output = run_vizpalette(args);
    assert!(
        output.status.success(),
        "vizpalette failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}

/// Check that a file exists and starts with the PNG signature
pub fn assert_png(path: &Path) {
    let bytes = std::fs::read(path).expect("image file should be created");
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G']),
        "{} is not a PNG",
        path.display()
    );
}
