mod app;
pub mod apps;
pub mod config;
pub mod controls;
pub mod doctor;
pub mod handlers;
pub mod i18n;
pub mod prefs;
pub mod render;
pub mod schedule;
pub mod shell;
pub mod telemetry;
pub mod terminal_restore;
pub mod utf8_safe;
pub mod weather;

pub use app::{
    crash_log_path, init_logging, log_debug, log_debug_content, log_file_path, log_panic,
};
pub use handlers::{Action, Outcome, PrefsController};
pub use prefs::{Preferences, PreferencesStore, Theme};
pub use weather::{WeatherMessage, WeatherPanel, WeatherWorker};
