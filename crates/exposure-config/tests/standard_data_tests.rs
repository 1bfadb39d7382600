//! Integration tests against the built-in reference dataset.

use approx::assert_relative_eq;
use exposure_analytics::{aggregate, drill_down, DashboardSession, DashboardView};
use exposure_config::{ConfigError, ConfigKey, DashboardConfig, ReferenceData};
use exposure_core::{AreaKind, AssetClass, DisplayMode, Portfolio};
use std::fs;
use tempfile::TempDir;

fn sample_portfolio() -> Portfolio {
    Portfolio::from_pairs([
        ("VFEM", 11.08),
        ("AGBP", 27.81),
        ("H50E", 22.23),
        ("IGLN", 16.67),
        ("XDJP", 11.11),
        ("XDUS", 11.09),
    ])
    .unwrap()
}

// =============================================================================
// DISTRIBUTION
// =============================================================================

#[test]
fn test_sample_distribution() {
    let data = ReferenceData::standard().unwrap();
    let dist = aggregate(&sample_portfolio(), &data.funds).unwrap();

    assert_relative_eq!(dist.total, 99.99, epsilon = 1e-9);
    assert_relative_eq!(dist.fee_percent, 0.101_077_107_7, epsilon = 1e-9);
    assert_relative_eq!(dist.assets[&AssetClass::Stock], 55.51, epsilon = 1e-9);
    assert_relative_eq!(dist.assets[&AssetClass::Bond], 27.81, epsilon = 1e-9);
    assert_relative_eq!(dist.assets[&AssetClass::Gold], 16.67, epsilon = 1e-9);

    // every fund in the dataset is fully mapped, so all three views partition the total
    assert_relative_eq!(dist.countries.grand_total(), dist.total, epsilon = 1e-9);
    assert_relative_eq!(dist.zones.grand_total(), dist.total, epsilon = 1e-9);
    assert_eq!(dist.zones.len(), 9);
}

#[test]
fn test_sample_dashboard_view() {
    let data = ReferenceData::standard().unwrap();
    let dist = aggregate(&sample_portfolio(), &data.funds).unwrap();
    let view = DashboardView::build(&dist, &data.labels, &DashboardConfig::default().settings());

    let countries = &view.countries;
    assert_eq!(countries.breakdown.len(), 15);
    let first: Vec<_> = countries.areas().take(3).map(|a| a.as_str()).collect();
    assert_eq!(first, vec!["USA", "NoN", "JPN"]);
    assert_relative_eq!(countries.breakdown.area_sum("USA"), 21.9922, epsilon = 1e-9);
    assert_relative_eq!(countries.breakdown.grand_total(), 99.99, epsilon = 1e-9);
    assert!(countries.breakdown.contains("other"));

    // zones are not truncated by default
    assert_eq!(view.zones.breakdown.len(), 9);
    assert_eq!(view.chart(AreaKind::Zone).title, "Zones");
}

#[test]
fn test_percent_profiles_use_labels() {
    let data = ReferenceData::standard().unwrap();
    let dist = aggregate(&sample_portfolio(), &data.funds).unwrap();
    let config = DashboardConfig::new().with_mode(DisplayMode::Percent);
    let view = DashboardView::build(&dist, &data.labels, &config.settings());

    let lines = view.zones.profile("nn").unwrap();
    assert_eq!(lines[0], "Not National 18.3%");
    assert_eq!(lines[1], " - bond: 1.7%");
    assert_eq!(lines[2], " - gold: 16.7%");
    assert_relative_eq!(view.zones.breakdown.grand_total(), 100.0, epsilon = 1e-9);
}

// =============================================================================
// DRILL-DOWN
// =============================================================================

#[test]
fn test_europe_drill_down() {
    let data = ReferenceData::standard().unwrap();
    let dist = aggregate(&sample_portfolio(), &data.funds).unwrap();
    let settings = DashboardConfig::default().settings();

    let drill = drill_down(&dist, &data.zones, "EU", &data.labels, &settings).unwrap();
    assert_eq!(drill.countries.title, "Europe zone");
    assert!(drill.countries.breakdown.contains("FRA"));
    assert!(!drill.countries.breakdown.contains("USA"));

    let pie: f64 = drill.assets.iter().map(|s| s.value).sum();
    assert_relative_eq!(pie, 28.181, epsilon = 1e-9);
}

#[test]
fn test_session_with_standard_data() {
    let data = ReferenceData::standard().unwrap();
    let mut session = DashboardSession::new(
        &data.funds,
        &data.zones,
        &data.labels,
        DashboardConfig::default().settings(),
    );

    assert!(session.update(sample_portfolio()).unwrap());
    session.drill_down("as").unwrap();
    assert_eq!(session.drill().unwrap().countries.title, "Japan zone");

    session.set_mode(DisplayMode::Percent).unwrap();
    let drill = session.drill().unwrap();
    assert_relative_eq!(drill.countries.breakdown.grand_total(), 100.0, epsilon = 1e-9);
}

// =============================================================================
// FILES
// =============================================================================

#[test]
fn test_reference_data_file_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("funds.json");

    let data = ReferenceData::standard().unwrap();
    fs::write(&path, data.to_json_string().unwrap()).unwrap();

    let loaded = ReferenceData::load(&path).unwrap();
    assert_eq!(loaded, data);
}

#[test]
fn test_reference_data_missing_and_unsupported() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        ReferenceData::load(dir.path().join("missing.json")),
        Err(ConfigError::NotFound { .. })
    ));

    let yaml = dir.path().join("funds.yaml");
    fs::write(&yaml, "funds: []").unwrap();
    assert!(matches!(
        ReferenceData::load(&yaml),
        Err(ConfigError::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_dashboard_config_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = DashboardConfig::load_or_default(&path).unwrap();
    assert_eq!(config, DashboardConfig::default());

    config.set(ConfigKey::TopCountries, "6").unwrap();
    config.set(ConfigKey::Mode, "percent").unwrap();
    config.save(&path).unwrap();

    let loaded = DashboardConfig::load(&path).unwrap();
    assert_eq!(loaded.top_countries, 6);
    assert_eq!(loaded.mode, DisplayMode::Percent);
}

#[test]
fn test_dashboard_config_reference_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("funds.toml");
    fs::write(
        &path,
        r#"
        [[funds]]
        ticker = "ONLY"
        assetClass = "cash"
        fee = 0.0
        countries = { GBR = 100 }
        zones = { uk = 100 }
        "#,
    )
    .unwrap();

    let config = DashboardConfig::new().with_reference(&path);
    let data = config.reference_data().unwrap();
    assert_eq!(data.funds.len(), 1);
    assert!(data.zones.is_empty());

    let standard = DashboardConfig::new().reference_data().unwrap();
    assert_eq!(standard.funds.len(), 9);
}
