//! Weather readings fetched off the UI thread.
//!
//! Each fetch runs on its own short-lived thread and posts exactly one message
//! back. Superseded fetches are not cancelled; whatever arrives is applied.

use crate::config::{AppConfig, WeatherSourceKind};
use crate::log_debug;
use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use serde::Deserialize;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// One observation; only the latest is kept for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherReading {
    pub temperature_celsius: f64,
    pub condition_code: i64,
}

/// Anything that can produce a current reading.
pub trait WeatherSource: Send + Sync {
    fn fetch(&self) -> Result<WeatherReading>;
    fn label(&self) -> &'static str;
}

/// Fixed reading used when no network source is wanted.
pub struct PlaceholderSource;

pub const PLACEHOLDER_READING: WeatherReading = WeatherReading {
    temperature_celsius: 12.0,
    condition_code: 800,
};

impl WeatherSource for PlaceholderSource {
    fn fetch(&self) -> Result<WeatherReading> {
        Ok(PLACEHOLDER_READING)
    }

    fn label(&self) -> &'static str {
        "placeholder"
    }
}

/// Unauthenticated forecast endpoint keyed by coordinates.
pub struct OpenMeteoSource {
    endpoint: String,
    latitude: f64,
    longitude: f64,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    weathercode: i64,
}

impl OpenMeteoSource {
    pub fn new(endpoint: &str, latitude: f64, longitude: f64, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("polygol-mini/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build weather HTTP client")?;
        Ok(Self {
            endpoint: endpoint.to_string(),
            latitude,
            longitude,
            client,
        })
    }

    pub fn request_url(&self) -> String {
        format!(
            "{}?latitude={}&longitude={}&current_weather=true",
            self.endpoint, self.latitude, self.longitude
        )
    }
}

/// Pull the current reading out of a forecast response body.
pub fn parse_forecast(body: &str) -> Result<WeatherReading> {
    let parsed: ForecastResponse =
        serde_json::from_str(body).context("unexpected forecast response")?;
    let current = parsed.current_weather;
    if !current.temperature.is_finite() {
        return Err(anyhow!("forecast temperature is not a number"));
    }
    Ok(WeatherReading {
        temperature_celsius: current.temperature,
        condition_code: current.weathercode,
    })
}

impl WeatherSource for OpenMeteoSource {
    fn fetch(&self) -> Result<WeatherReading> {
        let url = self.request_url();
        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("weather request to {} failed", self.endpoint))?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("weather endpoint returned HTTP {status}"));
        }
        let body = response.text().context("failed to read weather response")?;
        parse_forecast(&body)
    }

    fn label(&self) -> &'static str {
        "open-meteo"
    }
}

/// Build the source selected on the command line.
pub fn source_from_config(config: &AppConfig) -> Result<Arc<dyn WeatherSource>> {
    Ok(match config.weather_source {
        WeatherSourceKind::OpenMeteo => Arc::new(OpenMeteoSource::new(
            &config.weather_endpoint,
            config.latitude,
            config.longitude,
            config.weather_timeout(),
        )?),
        WeatherSourceKind::Placeholder => Arc::new(PlaceholderSource),
    })
}

/// Messages sent from a fetch thread back to the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherMessage {
    Reading(WeatherReading),
    Error(String),
}

/// Spawns fetches and collects their results on one channel.
pub struct WeatherWorker {
    source: Arc<dyn WeatherSource>,
    tx: Sender<WeatherMessage>,
    rx: Receiver<WeatherMessage>,
    in_flight: usize,
}

impl WeatherWorker {
    pub fn new(source: Arc<dyn WeatherSource>) -> Self {
        let (tx, rx) = unbounded();
        Self {
            source,
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Start a fetch in the background.
    pub fn request(&mut self) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.in_flight += 1;
        let spawned = thread::Builder::new()
            .name("weather-fetch".to_string())
            .spawn(move || {
                let started = Instant::now();
                let message = match source.fetch() {
                    Ok(reading) => WeatherMessage::Reading(reading),
                    Err(err) => WeatherMessage::Error(format!("{err:#}")),
                };
                tracing::debug!(
                    source = source.label(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "weather fetch finished"
                );
                let _ = tx.send(message);
            });
        if let Err(err) = spawned {
            self.in_flight -= 1;
            let _ = self
                .tx
                .send(WeatherMessage::Error(format!("failed to spawn weather fetch: {err}")));
        }
    }

    /// Non-blocking; returns the next finished fetch if any.
    pub fn poll(&mut self) -> Option<WeatherMessage> {
        match self.rx.try_recv() {
            Ok(message) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(message)
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn source_label(&self) -> &'static str {
        self.source.label()
    }
}

/// What the badge last learned: the newest reading and whether the latest
/// attempt failed before anything was ever shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherPanel {
    latest: Option<WeatherReading>,
    unavailable: bool,
}

impl WeatherPanel {
    pub fn record(&mut self, reading: WeatherReading) {
        self.latest = Some(reading);
        self.unavailable = false;
    }

    /// A failed fetch leaves a shown reading in place.
    pub fn record_failure(&mut self, error: &str) {
        log_debug(&format!("weather fetch failed: {error}"));
        tracing::warn!(error, "weather fetch failed");
        if self.latest.is_none() {
            self.unavailable = true;
        }
    }

    pub fn apply(&mut self, message: WeatherMessage) {
        match message {
            WeatherMessage::Reading(reading) => self.record(reading),
            WeatherMessage::Error(error) => self.record_failure(&error),
        }
    }

    pub fn latest(&self) -> Option<&WeatherReading> {
        self.latest.as_ref()
    }

    pub fn is_unavailable(&self) -> bool {
        self.unavailable
    }
}
