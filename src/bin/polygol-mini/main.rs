//! Polygol Mini home screen: clock, date, weather, a quick-control shade and
//! an app drawer in a full-screen terminal UI.
//!
//! # Architecture
//!
//! - UI thread: polls input, runs the clock/weather tickers, draws frames
//! - Weather fetch: short-lived thread per request, one message back
//! - Preferences: loaded once, saved synchronously after every change

mod event_loop;
mod event_state;
mod input;
mod layout;
mod theme;
mod ui;

use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use polygol_mini::config::{AppConfig, StorageKind, DEFAULT_CLOCK_TICK_MS};
use polygol_mini::doctor::doctor_report;
use polygol_mini::i18n::Language;
use polygol_mini::prefs::{CookieBackend, DocumentBackend, PrefsBackend};
use polygol_mini::telemetry::init_tracing;
use polygol_mini::weather::source_from_config;
use polygol_mini::{init_logging, log_debug, log_file_path, PreferencesStore, PrefsController, WeatherWorker};

use crate::event_loop::{run_app, LoopTimers};
use crate::event_state::UiState;

fn open_store(config: &AppConfig) -> PreferencesStore {
    let path = config.prefs_path();
    let backend: Box<dyn PrefsBackend> = match config.storage {
        StorageKind::Document => Box::new(DocumentBackend::new(path)),
        StorageKind::Cookie => Box::new(CookieBackend::new(path)),
    };
    PreferencesStore::new(backend)
}

fn main() -> Result<()> {
    let mut config = AppConfig::parse();
    if config.doctor {
        println!("{}", doctor_report(&config).render());
        return Ok(());
    }

    config.validate()?;
    init_logging(&config);
    init_tracing(&config);
    log_debug("=== Polygol Mini Started ===");
    log_debug(&format!("Log file: {:?}", log_file_path()));
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        storage = config.storage.label(),
        weather_source = config.weather_source.label(),
        "startup"
    );

    let mut controller = PrefsController::load(open_store(&config));
    log_debug(&format!(
        "preferences: {} backend at {}",
        controller.store().backend_label(),
        controller.store().path().display()
    ));

    if config.reset_prefs {
        if let Some(err) = controller.reset() {
            return Err(anyhow!("failed to reset preferences: {err}"));
        }
    }

    if config.print_prefs {
        let json = serde_json::to_string_pretty(controller.prefs())
            .context("failed to serialize preferences")?;
        println!("{json}");
        return Ok(());
    }

    let lang = Language::from_code(&config.lang).unwrap_or_default();
    let mut worker = WeatherWorker::new(source_from_config(&config)?);
    let mut timers = LoopTimers::new(
        Duration::from_millis(DEFAULT_CLOCK_TICK_MS),
        config.weather_interval(),
        Instant::now(),
    );
    let mut ui = UiState::new(controller, lang);

    let result = run_app(&mut ui, &mut timers, &mut worker);
    log_debug("=== Polygol Mini Exiting ===");
    result
}
