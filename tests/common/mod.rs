// Shared test helpers

#![allow(dead_code)]

use dashboard_server::config::AppConfig;
use tempfile::TempDir;

pub const INDEX_HTML: &str = "<!doctype html><title>dashboard</title>";
pub const APP_JS: &str = "console.log('dashboard');";

/// Front-end bundle in a temp dir; keep the TempDir alive for the test's duration.
pub fn frontend_bundle() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(dir.path().join("app.js"), APP_JS).unwrap();
    dir
}

pub fn config_with_frontend(dir: &TempDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.frontend.dir = dir.path().to_str().unwrap().to_string();
    config
}

/// Asserts `value` has exactly `digits` fractional digits and lies in [lo, hi).
pub fn assert_fixed_in_range(field: &str, value: &str, digits: usize, lo: f64, hi: f64) {
    let (_, frac) = value
        .split_once('.')
        .unwrap_or_else(|| panic!("{field}={value:?} has no decimal point"));
    assert_eq!(frac.len(), digits, "{field}={value:?} precision");
    let n: f64 = value.parse().unwrap();
    assert!(n >= lo && n < hi, "{field}={value} outside [{lo}, {hi})");
}
