use super::defaults::{
    default_prefs_path, MAX_WEATHER_INTERVAL_SECS, MAX_WEATHER_TIMEOUT_MS,
    MIN_WEATHER_INTERVAL_SECS, MIN_WEATHER_TIMEOUT_MS, SUPPORTED_LANGS,
};
use super::AppConfig;
use anyhow::{bail, Result};
use std::path::PathBuf;
use std::time::Duration;

impl AppConfig {
    /// Check CLI values and normalize them.
    pub fn validate(&mut self) -> Result<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            bail!("--latitude must be between -90 and 90, got {}", self.latitude);
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            bail!(
                "--longitude must be between -180 and 180, got {}",
                self.longitude
            );
        }

        if !(MIN_WEATHER_INTERVAL_SECS..=MAX_WEATHER_INTERVAL_SECS)
            .contains(&self.weather_interval_secs)
        {
            bail!(
                "--weather-interval-secs must be between {MIN_WEATHER_INTERVAL_SECS} and {MAX_WEATHER_INTERVAL_SECS}, got {}",
                self.weather_interval_secs
            );
        }
        if !(MIN_WEATHER_TIMEOUT_MS..=MAX_WEATHER_TIMEOUT_MS).contains(&self.weather_timeout_ms) {
            bail!(
                "--weather-timeout-ms must be between {MIN_WEATHER_TIMEOUT_MS} and {MAX_WEATHER_TIMEOUT_MS} ms, got {}",
                self.weather_timeout_ms
            );
        }

        let endpoint = self.weather_endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            bail!("--weather-endpoint must be an http(s) URL, got '{endpoint}'");
        }
        if endpoint.contains('?') {
            bail!("--weather-endpoint must not carry a query string; coordinates are added automatically");
        }
        self.weather_endpoint = endpoint.trim_end_matches('/').to_string();

        let lang = self.lang.trim().to_ascii_lowercase();
        if !SUPPORTED_LANGS.contains(&lang.as_str()) {
            bail!(
                "--lang must be one of {}, got '{}'",
                SUPPORTED_LANGS.join(", "),
                self.lang
            );
        }
        self.lang = lang;

        if let Some(path) = &self.prefs_file {
            if path.as_os_str().is_empty() {
                bail!("--prefs-file must not be empty");
            }
            if path.is_dir() {
                bail!("--prefs-file points at a directory: {}", path.display());
            }
        }

        Ok(())
    }

    /// Resolved preferences file for the selected storage layout.
    pub fn prefs_path(&self) -> PathBuf {
        self.prefs_file
            .clone()
            .unwrap_or_else(|| default_prefs_path(self.storage))
    }

    pub fn weather_interval(&self) -> Duration {
        Duration::from_secs(self.weather_interval_secs)
    }

    pub fn weather_timeout(&self) -> Duration {
        Duration::from_millis(self.weather_timeout_ms)
    }

    pub fn logs_enabled(&self) -> bool {
        self.logs && !self.no_logs
    }
}
