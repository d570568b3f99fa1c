//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Two plain rows with a wide key and a metadata row.
pub const SIMPLE_LAYOUT: &str = r#"[
  {"name": "Fixture Board", "author": "Test Suite"},
  ["Esc", "Q", "W"],
  [{"w": 1.5}, "Tab", "A"]
]"#;

/// Split thumb cluster: a rotation group after a normal row.
pub const ROTATED_LAYOUT: &str = r#"[
  ["Q", "W", "E"],
  [{"r": 15, "rx": 3, "ry": 1, "y": -0.5}, "Space", {"h": 1.5}, "Enter"],
  ["Fn"]
]"#;

/// ISO enter with a secondary rectangle.
pub const ISO_ENTER_LAYOUT: &str = r#"[
  [{"x": 0.25, "w": 1.25, "h": 2, "w2": 1.5, "h2": 1, "x2": -0.25}, "Enter"]
]"#;

/// The same layout as `SIMPLE_LAYOUT`, as copied from the editor's raw data tab.
pub const RAW_DATA_LAYOUT: &str = "{name:\"Fixture Board\",author:\"Test Suite\"},\n[\"Esc\",\"Q\",\"W\"],\n[{w:1.5},\"Tab\",\"A\"]";

/// Metadata object in the middle of the rows.
pub const MISPLACED_METADATA_LAYOUT: &str = r#"[["Esc"], {"name": "late"}, ["Q"]]"#;

/// A number where a token should be.
pub const BAD_TOKEN_LAYOUT: &str = r#"[["Esc", 42]]"#;

/// Writes layout text to a file in a fresh temp directory.
///
/// The returned `TempDir` must be kept alive for the file to exist.
pub fn create_temp_layout_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let layout_path = temp_dir.path().join("layout.json");
    write_layout_file(content, &layout_path).expect("Failed to write layout file");
    (layout_path, temp_dir)
}

/// Writes layout text to a specific path.
pub fn write_layout_file(content: &str, path: &Path) -> std::io::Result<()> {
    fs::write(path, content)
}

/// Asserts two floats are equal within 1e-6.
pub fn assert_approx(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "{what}: expected {expected}, got {actual}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_files_are_written() {
        let (path, _temp_dir) = create_temp_layout_file(SIMPLE_LAYOUT);
        assert_eq!(fs::read_to_string(path).unwrap(), SIMPLE_LAYOUT);
    }
}
