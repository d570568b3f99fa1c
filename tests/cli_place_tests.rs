//! End-to-end tests for `kleplacer place` command.

use std::path::Path;
use std::process::{Command, Output};

mod fixtures;
use fixtures::*;

/// Path to the kleplacer binary
fn kleplacer_bin() -> &'static str {
    env!("CARGO_BIN_EXE_kleplacer")
}

/// Runs `place` with an empty, isolated config directory.
fn run_place(layout_path: &Path, extra: &[&str]) -> Output {
    let config_dir = tempfile::TempDir::new().unwrap();
    Command::new(kleplacer_bin())
        .env("KLEPLACER_CONFIG_DIR", config_dir.path())
        .args(["place", "--layout", layout_path.to_str().unwrap()])
        .args(extra)
        .output()
        .expect("Failed to execute command")
}

fn parse_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

#[test]
fn test_place_unit_spacing() {
    let (layout_path, _temp_dir) = create_temp_layout_file(r#"[["a","b"]]"#);

    let output = run_place(
        &layout_path,
        &["--h-spacing", "1", "--v-spacing", "1", "--json"],
    );
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let plan = parse_json(&output);
    assert_eq!(plan["group_name"], "Switches");
    assert_eq!(plan["hide_template"], true);

    let placements = plan["placements"].as_array().unwrap();
    assert_eq!(placements.len(), 2);
    assert_eq!(placements[0]["transform"]["translation"], serde_json::json!([0.5, -0.5, 0.0]));
    assert_eq!(placements[1]["transform"]["translation"], serde_json::json!([1.5, -0.5, 0.0]));
    assert_eq!(placements[1]["transform"]["rotation_angle_radians"], 0.0);
}

#[test]
fn test_place_rotated_key() {
    let (layout_path, _temp_dir) =
        create_temp_layout_file(r#"[[{"r":45,"rx":2,"ry":2},"a"]]"#);

    let output = run_place(
        &layout_path,
        &["--h-spacing", "1", "--v-spacing", "1", "--json"],
    );
    assert_eq!(output.status.code(), Some(0));

    let plan = parse_json(&output);
    let transform = &plan["placements"][0]["transform"];
    assert_approx(
        transform["rotation_angle_radians"].as_f64().unwrap(),
        -std::f64::consts::FRAC_PI_4,
        "angle",
    );
    assert_eq!(transform["rotation_center"], serde_json::json!([2.0, -2.0, 0.0]));
    assert_eq!(transform["translation"], serde_json::json!([2.5, -2.5, 0.0]));
}

#[test]
fn test_place_default_spacing_and_group() {
    let (layout_path, _temp_dir) = create_temp_layout_file(SIMPLE_LAYOUT);

    let output = run_place(&layout_path, &["--group", "Choc Switches", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let plan = parse_json(&output);
    assert_eq!(plan["group_name"], "Choc Switches");
    assert_approx(plan["spacing"]["horizontal"].as_f64().unwrap(), 19.05, "h spacing");

    let esc = &plan["placements"][0]["transform"]["translation"];
    assert_approx(esc[0].as_f64().unwrap(), 9.525, "esc x");
    assert_approx(esc[1].as_f64().unwrap(), -9.525, "esc y");
}

#[test]
fn test_place_uses_config_spacing() {
    let (layout_path, _temp_dir) = create_temp_layout_file(r#"[["a"]]"#);
    let config_dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("config.toml"),
        "[spacing]\nhorizontal = 18.0\nvertical = 17.0\n\n[output]\ngroup_name = \"Keys\"\nhide_template = false\n",
    )
    .unwrap();

    let output = Command::new(kleplacer_bin())
        .env("KLEPLACER_CONFIG_DIR", config_dir.path())
        .args(["place", "--layout", layout_path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let plan = parse_json(&output);
    assert_eq!(plan["group_name"], "Keys");
    assert_eq!(plan["hide_template"], false);
    assert_eq!(
        plan["placements"][0]["transform"]["translation"],
        serde_json::json!([9.0, -8.5, 0.0])
    );
}

#[test]
fn test_place_human_readable() {
    let (layout_path, _temp_dir) = create_temp_layout_file(ROTATED_LAYOUT);

    let output = run_place(&layout_path, &[]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Placing 6 footprints"), "stdout: {stdout}");
    assert!(stdout.contains("rotate -15.00°"), "stdout: {stdout}");
    assert!(stdout.contains("hidden"), "stdout: {stdout}");
}

#[test]
fn test_place_bad_token_fails() {
    let (layout_path, _temp_dir) = create_temp_layout_file(BAD_TOKEN_LAYOUT);

    let output = run_place(&layout_path, &["--json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("row 0, token 1"), "stderr: {stderr}");
}

#[test]
fn test_place_accepts_negative_spacing() {
    let (layout_path, _temp_dir) = create_temp_layout_file(r#"[["a"]]"#);

    let output = run_place(&layout_path, &["--h-spacing", "-2", "--v-spacing", "0", "--json"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let plan = parse_json(&output);
    assert_eq!(
        plan["placements"][0]["transform"]["translation"],
        serde_json::json!([-1.0, 0.0, 0.0])
    );
}
