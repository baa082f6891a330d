use super::{AppConfig, StorageKind, WeatherSourceKind, DEFAULT_WEATHER_ENDPOINT};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn defaults_validate() {
    let mut cfg = AppConfig::parse_from(["test-app"]);
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.storage, StorageKind::Document);
    assert_eq!(cfg.weather_source, WeatherSourceKind::OpenMeteo);
    assert_eq!(cfg.weather_endpoint, DEFAULT_WEATHER_ENDPOINT);
    assert_eq!(cfg.weather_interval(), Duration::from_secs(600));
}

#[test]
fn rejects_latitude_out_of_bounds() {
    let mut cfg = AppConfig::parse_from(["test-app", "--latitude", "91"]);
    assert!(cfg.validate().is_err());
    let mut cfg = AppConfig::parse_from(["test-app", "--latitude", "-90.5"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn accepts_negative_coordinates() {
    let mut cfg = AppConfig::parse_from(["test-app", "--latitude", "-33.86", "--longitude", "-151.2"]);
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.latitude, -33.86);
    assert_eq!(cfg.longitude, -151.2);
}

#[test]
fn rejects_longitude_out_of_bounds() {
    let mut cfg = AppConfig::parse_from(["test-app", "--longitude", "180.1"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn rejects_weather_interval_out_of_bounds() {
    let mut cfg = AppConfig::parse_from(["test-app", "--weather-interval-secs", "5"]);
    assert!(cfg.validate().is_err());
    let mut cfg = AppConfig::parse_from(["test-app", "--weather-interval-secs", "86401"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn rejects_weather_timeout_out_of_bounds() {
    let mut cfg = AppConfig::parse_from(["test-app", "--weather-timeout-ms", "10"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn rejects_non_http_endpoint() {
    let mut cfg = AppConfig::parse_from(["test-app", "--weather-endpoint", "ftp://example.com"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn rejects_endpoint_with_query() {
    let mut cfg = AppConfig::parse_from([
        "test-app",
        "--weather-endpoint",
        "https://example.com/forecast?latitude=1",
    ]);
    assert!(cfg.validate().is_err());
}

#[test]
fn endpoint_trailing_slash_is_trimmed() {
    let mut cfg = AppConfig::parse_from([
        "test-app",
        "--weather-endpoint",
        "https://example.com/forecast/",
    ]);
    cfg.validate().expect("valid endpoint");
    assert_eq!(cfg.weather_endpoint, "https://example.com/forecast");
}

#[test]
fn lang_is_normalized_and_checked() {
    let mut cfg = AppConfig::parse_from(["test-app", "--lang", " ES "]);
    cfg.validate().expect("supported lang");
    assert_eq!(cfg.lang, "es");

    let mut cfg = AppConfig::parse_from(["test-app", "--lang", "xx"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn prefs_path_prefers_explicit_file() {
    let cfg = AppConfig::parse_from(["test-app", "--prefs-file", "/tmp/polygol-prefs.json"]);
    assert_eq!(cfg.prefs_path(), PathBuf::from("/tmp/polygol-prefs.json"));
}

#[test]
fn default_prefs_path_depends_on_storage() {
    let document = AppConfig::parse_from(["test-app"]);
    let cookie = AppConfig::parse_from(["test-app", "--storage", "cookie"]);
    assert!(document.prefs_path().ends_with("polygol-mini/storage.json"));
    assert!(cookie.prefs_path().ends_with("polygol-mini/cookies.txt"));
}

#[test]
fn rejects_prefs_file_directory() {
    let dir = std::env::temp_dir();
    let mut cfg = AppConfig::parse_from(["test-app"]);
    cfg.prefs_file = Some(dir);
    assert!(cfg.validate().is_err());
}

#[test]
fn no_logs_overrides_logs() {
    let cfg = AppConfig::parse_from(["test-app", "--logs"]);
    assert!(cfg.logs_enabled());
    let cfg = AppConfig::parse_from(["test-app", "--logs", "--no-logs"]);
    assert!(!cfg.logs_enabled());
}

#[test]
fn parses_value_enums() {
    let cfg = AppConfig::parse_from([
        "test-app",
        "--storage",
        "cookie",
        "--weather-source",
        "placeholder",
    ]);
    assert_eq!(cfg.storage, StorageKind::Cookie);
    assert_eq!(cfg.weather_source, WeatherSourceKind::Placeholder);
    assert_eq!(cfg.storage.label(), "cookie");
    assert_eq!(cfg.weather_source.label(), "placeholder");
}
