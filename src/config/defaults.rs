use super::StorageKind;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_WEATHER_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_LATITUDE: f64 = 52.52;
pub const DEFAULT_LONGITUDE: f64 = 13.41;
pub const DEFAULT_WEATHER_INTERVAL_SECS: u64 = 600;
pub const DEFAULT_WEATHER_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_CLOCK_TICK_MS: u64 = 1000;

/// Storage key the record lives under in the document backend.
pub const PREFS_NAMESPACE_KEY: &str = "polygolMiniSettings";

pub(super) const MIN_WEATHER_INTERVAL_SECS: u64 = 30;
pub(super) const MAX_WEATHER_INTERVAL_SECS: u64 = 24 * 60 * 60;
pub(super) const MIN_WEATHER_TIMEOUT_MS: u64 = 500;
pub(super) const MAX_WEATHER_TIMEOUT_MS: u64 = 120_000;
pub(super) const SUPPORTED_LANGS: &[&str] = &["en", "es"];

const APP_DIR_NAME: &str = "polygol-mini";

/// Default preferences file for a storage layout.
///
/// Falls back to the temp dir when the platform has no config directory.
pub fn default_prefs_path(kind: StorageKind) -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(env::temp_dir);
    let file_name = match kind {
        StorageKind::Document => "storage.json",
        StorageKind::Cookie => "cookies.txt",
    };
    base.join(APP_DIR_NAME).join(file_name)
}
