//! `--doctor` report: environment and resolved settings, printed as plain text.

use crate::config::{AppConfig, StorageKind, PREFS_NAMESPACE_KEY};
use crate::telemetry::tracing_log_path;
use crate::{crash_log_path, log_file_path};
use crossterm::terminal::size as terminal_size;
use std::{env, fmt::Display};

pub struct DoctorReport {
    lines: Vec<String>,
}

impl DoctorReport {
    pub fn new(title: &str) -> Self {
        Self {
            lines: vec![title.to_string()],
        }
    }

    pub fn section(&mut self, title: &str) {
        self.lines.push(String::new());
        self.lines.push(format!("{title}:"));
    }

    pub fn push_kv(&mut self, key: &str, value: impl Display) {
        self.lines.push(format!("  {key}: {value}"));
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

fn enabled(flag: bool) -> &'static str {
    if flag {
        "enabled"
    } else {
        "disabled"
    }
}

pub fn doctor_report(config: &AppConfig) -> DoctorReport {
    let mut report = DoctorReport::new("Polygol Mini Doctor");
    report.push_kv("version", env!("CARGO_PKG_VERSION"));
    report.push_kv("os", format!("{}/{}", env::consts::OS, env::consts::ARCH));

    let mut validated = config.clone();
    let validation = validated.validate();
    let resolved = if validation.is_ok() { &validated } else { config };

    report.section("Terminal");
    match terminal_size() {
        Ok((cols, rows)) => report.push_kv("size", format!("{cols}x{rows}")),
        Err(err) => report.push_kv("size", format!("error: {err}")),
    }
    report.push_kv("term", env::var("TERM").unwrap_or_else(|_| "unset".to_string()));
    if let Ok(colorterm) = env::var("COLORTERM") {
        report.push_kv("colorterm", colorterm);
    }
    if env::var("NO_COLOR").is_ok() {
        report.push_kv("no_color", "set");
    }

    report.section("Config");
    match &validation {
        Ok(()) => report.push_kv("validation", "ok"),
        Err(err) => report.push_kv("validation", format!("error: {err}")),
    }
    report.push_kv("lang", &resolved.lang);

    report.section("Preferences");
    report.push_kv("storage", resolved.storage.label());
    report.push_kv("path", resolved.prefs_path().display());
    report.push_kv("exists", resolved.prefs_path().exists());
    if resolved.storage == StorageKind::Document {
        report.push_kv("namespace", PREFS_NAMESPACE_KEY);
    }

    report.section("Weather");
    report.push_kv("source", resolved.weather_source.label());
    report.push_kv("endpoint", &resolved.weather_endpoint);
    report.push_kv(
        "location",
        format!("{}, {}", resolved.latitude, resolved.longitude),
    );
    report.push_kv("interval_secs", resolved.weather_interval_secs);
    report.push_kv("timeout_ms", resolved.weather_timeout_ms);

    report.section("Logging");
    report.push_kv("logs", enabled(resolved.logs_enabled()));
    report.push_kv("log_content", enabled(resolved.log_content));
    report.push_kv("log_file", log_file_path().display());
    report.push_kv("crash_log", crash_log_path().display());
    report.push_kv("trace_log", tracing_log_path().display());

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn report_lists_sections_in_order() {
        let mut report = DoctorReport::new("Title");
        report.push_kv("a", 1);
        report.section("Next");
        report.push_kv("b", "two");
        assert_eq!(report.render(), "Title\n  a: 1\n\nNext:\n  b: two");
    }

    #[test]
    fn doctor_covers_storage_and_weather() {
        let config = AppConfig::parse_from([
            "polygol-mini",
            "--storage",
            "cookie",
            "--prefs-file",
            "/tmp/polygol-doctor-cookies.txt",
            "--weather-source",
            "placeholder",
        ]);
        let text = doctor_report(&config).render();
        assert!(text.contains("validation: ok"));
        assert!(text.contains("storage: cookie"));
        assert!(text.contains("path: /tmp/polygol-doctor-cookies.txt"));
        assert!(text.contains("source: placeholder"));
        assert!(text.contains("logs: disabled"));
    }

    #[test]
    fn doctor_reports_validation_errors() {
        let config = AppConfig::parse_from(["polygol-mini", "--latitude", "120"]);
        let text = doctor_report(&config).render();
        assert!(text.contains("validation: error: --latitude"));
    }
}
