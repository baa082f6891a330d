//! Command-line parsing and validation helpers.

mod defaults;
#[cfg(test)]
mod tests;
mod validation;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub use defaults::{
    default_prefs_path, DEFAULT_CLOCK_TICK_MS, DEFAULT_LATITUDE, DEFAULT_LONGITUDE,
    DEFAULT_WEATHER_ENDPOINT, DEFAULT_WEATHER_INTERVAL_SECS, DEFAULT_WEATHER_TIMEOUT_MS,
    PREFS_NAMESPACE_KEY,
};

/// CLI options for the Polygol Mini home screen.
#[derive(Debug, Parser, Clone)]
#[command(about = "Polygol Mini home screen", author, version)]
pub struct AppConfig {
    /// Preferences file (defaults to the platform config dir)
    #[arg(long = "prefs-file", env = "POLYGOL_PREFS_FILE")]
    pub prefs_file: Option<PathBuf>,

    /// How preferences are laid out on disk
    #[arg(long, value_enum, default_value_t = StorageKind::Document)]
    pub storage: StorageKind,

    /// Where weather readings come from
    #[arg(long = "weather-source", value_enum, default_value_t = WeatherSourceKind::OpenMeteo)]
    pub weather_source: WeatherSourceKind,

    /// Forecast endpoint queried by the open-meteo source
    #[arg(long = "weather-endpoint", default_value = DEFAULT_WEATHER_ENDPOINT)]
    pub weather_endpoint: String,

    /// Latitude used for the forecast request
    #[arg(long, default_value_t = DEFAULT_LATITUDE, allow_hyphen_values = true)]
    pub latitude: f64,

    /// Longitude used for the forecast request
    #[arg(long, default_value_t = DEFAULT_LONGITUDE, allow_hyphen_values = true)]
    pub longitude: f64,

    /// Seconds between weather refreshes
    #[arg(long = "weather-interval-secs", default_value_t = DEFAULT_WEATHER_INTERVAL_SECS)]
    pub weather_interval_secs: u64,

    /// HTTP timeout for a single weather request (milliseconds)
    #[arg(long = "weather-timeout-ms", default_value_t = DEFAULT_WEATHER_TIMEOUT_MS)]
    pub weather_timeout_ms: u64,

    /// Label language for the quick controls and drawer
    #[arg(long, env = "POLYGOL_LANG", default_value = "en")]
    pub lang: String,

    /// Print environment diagnostics and exit
    #[arg(long = "doctor", default_value_t = false)]
    pub doctor: bool,

    /// Print the merged preferences as JSON and exit
    #[arg(long = "print-prefs", default_value_t = false)]
    pub print_prefs: bool,

    /// Overwrite stored preferences with the defaults before starting
    #[arg(long = "reset-prefs", default_value_t = false)]
    pub reset_prefs: bool,

    /// Enable file logging (debug)
    #[arg(long = "logs", env = "POLYGOL_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Disable all file logging (overrides --logs and log env vars)
    #[arg(long = "no-logs", env = "POLYGOL_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,

    /// Allow logging user-entered text such as wallpaper URLs (debug log only)
    #[arg(
        long = "log-content",
        env = "POLYGOL_LOG_CONTENT",
        default_value_t = false
    )]
    pub log_content: bool,
}

/// Physical layout of the preferences on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageKind {
    /// One JSON document holding the whole record under a namespace key
    Document,
    /// One cookie-style line per field
    Cookie,
}

impl StorageKind {
    pub fn label(self) -> &'static str {
        match self {
            StorageKind::Document => "document",
            StorageKind::Cookie => "cookie",
        }
    }
}

/// Available weather reading providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WeatherSourceKind {
    OpenMeteo,
    Placeholder,
}

impl WeatherSourceKind {
    pub fn label(self) -> &'static str {
        match self {
            WeatherSourceKind::OpenMeteo => "open-meteo",
            WeatherSourceKind::Placeholder => "placeholder",
        }
    }
}
