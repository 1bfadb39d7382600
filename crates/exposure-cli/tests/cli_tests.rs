//! End-to-end tests of the `exposure` binary against the built-in dataset.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command isolated from the user's saved settings.
fn exposure(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("exposure").unwrap();
    cmd.env("EXPOSURE_CONFIG", dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

fn write_holdings(dir: &TempDir, name: &str, text: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path.display().to_string()
}

// =============================================================================
// ANALYSIS COMMANDS
// =============================================================================

#[test]
fn test_funds_lists_standard_dataset() {
    let dir = TempDir::new().unwrap();
    exposure(&dir)
        .args(["funds", "--format", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VWRL"))
        .stdout(predicate::str::contains("IGLN"));
}

#[test]
fn test_funds_unknown_ticker_fails() {
    let dir = TempDir::new().unwrap();
    exposure(&dir)
        .args(["funds", "NOPE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NOPE"));
}

#[test]
fn test_breakdown_json() {
    let dir = TempDir::new().unwrap();
    let output = exposure(&dir)
        .args(["breakdown", "VUKE=60", "IGLT=40", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["total"], 100.0);
    assert_eq!(view["countries"]["breakdown"]["GBR"]["bond"], 40.0);
    assert_eq!(view["countries"]["breakdown"]["GBR"]["stock"], 60.0);
}

#[test]
fn test_breakdown_from_file_in_percent() {
    let dir = TempDir::new().unwrap();
    let file = write_holdings(&dir, "holdings.csv", "ticker,amount\nVUKE,30\nIGLN,10\n");
    exposure(&dir)
        .args(["breakdown", "--input", &file, "--mode", "percent", "--chart", "countries"])
        .args(["--format", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GBR=75.0%"))
        .stdout(predicate::str::contains("NoN=25.0%"));
}

#[test]
fn test_breakdown_warns_on_unknown_fund() {
    let dir = TempDir::new().unwrap();
    exposure(&dir)
        .args(["breakdown", "VUKE=10", "ZZZZ=5", "--format", "minimal"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown fund ZZZZ"));

    exposure(&dir)
        .args(["--quiet", "breakdown", "VUKE=10", "ZZZZ=5", "--format", "minimal"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown fund").not());
}

#[test]
fn test_breakdown_requires_holdings() {
    let dir = TempDir::new().unwrap();
    exposure(&dir)
        .arg("breakdown")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No holdings given"));
}

#[test]
fn test_breakdown_rejects_bad_row() {
    let dir = TempDir::new().unwrap();
    let file = write_holdings(&dir, "bad.csv", "VUKE,10\nIGLT,lots\n");
    exposure(&dir)
        .args(["breakdown", "--input", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_drill_into_zone() {
    let dir = TempDir::new().unwrap();
    exposure(&dir)
        .args(["drill", "eu", "H50E=50", "VUKE=50", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Europe zone"))
        .stdout(predicate::str::contains("FRA"))
        .stdout(predicate::str::contains("\"GBR\"").not());
}

#[test]
fn test_drill_unknown_zone() {
    let dir = TempDir::new().unwrap();
    exposure(&dir)
        .args(["drill", "mars", "VUKE=50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown zone"));
}

#[test]
fn test_profile_lines() {
    let dir = TempDir::new().unwrap();
    exposure(&dir)
        .args(["profile", "gbr", "VUKE=60", "IGLT=40"])
        .assert()
        .success()
        .stdout(predicate::str::diff("GBR 100.0\n - bond: 40.0\n - stock: 60.0\n"));

    exposure(&dir)
        .args(["profile", "uk", "VUKE=60", "IGLT=40", "--kind", "zone", "--mode", "percent"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("United Kingdom 100.0%"));
}

#[test]
fn test_profile_unknown_area() {
    let dir = TempDir::new().unwrap();
    exposure(&dir)
        .args(["profile", "JPN", "VUKE=60"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown area: JPN"));
}

#[test]
fn test_diff() {
    let dir = TempDir::new().unwrap();
    let a = write_holdings(&dir, "a.csv", "VWRL,10\n");
    let b = write_holdings(&dir, "b.csv", "VWRL,10\nIGLT,0\n");
    let c = write_holdings(&dir, "c.csv", "VWRL,12\n");

    exposure(&dir)
        .args(["diff", &a, &b, "--format", "minimal"])
        .assert()
        .success()
        .stdout("unchanged\n");

    exposure(&dir)
        .args(["diff", &a, &c, "--format", "minimal"])
        .assert()
        .success()
        .stdout("changed\n");

    exposure(&dir)
        .args(["diff", &a, &c, "--exit-code", "--format", "minimal"])
        .assert()
        .code(1);
}

// =============================================================================
// SETTINGS
// =============================================================================

#[test]
fn test_config_set_get_reset() {
    let dir = TempDir::new().unwrap();

    exposure(&dir)
        .args(["config", "set", "top_countries", "3"])
        .assert()
        .success();
    exposure(&dir)
        .args(["config", "get", "top-countries", "--format", "minimal"])
        .assert()
        .success()
        .stdout("3\n");
    assert!(dir.path().join("config.toml").exists());

    exposure(&dir)
        .args(["config", "reset", "top_countries"])
        .assert()
        .success();
    exposure(&dir)
        .args(["config", "get", "top_countries", "--format", "minimal"])
        .assert()
        .success()
        .stdout("14\n");
}

#[test]
fn test_config_reset_quiet() {
    let dir = TempDir::new().unwrap();
    exposure(&dir)
        .args(["config", "set", "precision", "3", "--quiet"])
        .assert()
        .success()
        .stdout("");
    exposure(&dir)
        .args(["config", "reset", "precision", "--quiet"])
        .assert()
        .success()
        .stdout("");
    exposure(&dir)
        .args(["config", "reset", "--all", "-q"])
        .assert()
        .success()
        .stdout("");
    exposure(&dir)
        .args(["config", "reset", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset all configuration"));
}

#[test]
fn test_config_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    exposure(&dir)
        .args(["config", "set", "precision", "12"])
        .assert()
        .failure();
    exposure(&dir)
        .args(["config", "set", "currency", "USD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown configuration key"));
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_saved_mode_applies_to_breakdown() {
    let dir = TempDir::new().unwrap();
    exposure(&dir)
        .args(["config", "set", "mode", "percent"])
        .assert()
        .success();
    exposure(&dir)
        .args(["breakdown", "VUKE=3", "IGLN=1", "--chart", "assets", "--format", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stock=75.0%"));
}

#[test]
fn test_custom_reference_data() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("funds.toml");
    fs::write(
        &data,
        r#"
        [[funds]]
        ticker = "HOME"
        assetClass = "property"
        fee = 0.4
        countries = { FRA = 100 }
        "#,
    )
    .unwrap();

    exposure(&dir)
        .args(["--data", data.to_str().unwrap(), "funds", "--format", "minimal"])
        .assert()
        .success()
        .stdout("HOME\n");
}
