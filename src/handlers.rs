//! Preference mutations: read the field, compute the new value, persist the
//! whole record, and report what has to be drawn again.

use crate::log_debug;
use crate::log_debug_content;
use crate::prefs::{Preferences, PreferencesStore};

/// Every user-facing preference change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleTheme,
    ToggleSeconds,
    ToggleClockFormat,
    ToggleWeather,
    ToggleSilent,
    ToggleFocus,
    ToggleAnimations,
    ToggleEffects,
    AdjustTone(i64),
    SetWallpaper(String),
    ResetWallpaper,
}

/// Parts of the screen that read the changed field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Repaint {
    pub clock: bool,
    pub theme: bool,
    pub weather: bool,
    pub wallpaper: bool,
    pub controls: bool,
    pub layout: bool,
}

/// Result of one handler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub repaint: Repaint,
    /// Weather was just switched back on and needs a fresh reading.
    pub refetch_weather: bool,
    /// Set when writing the record failed; the in-memory change still holds.
    pub save_error: Option<String>,
    pub summary: String,
}

/// Owns the live record and the store that persists it.
pub struct PrefsController {
    store: PreferencesStore,
    prefs: Preferences,
}

impl PrefsController {
    /// Load the record from `store`; falls back to defaults on any read problem.
    pub fn load(store: PreferencesStore) -> Self {
        let prefs = store.load();
        Self { store, prefs }
    }

    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    pub fn store(&self) -> &PreferencesStore {
        &self.store
    }

    /// Replace the record with the defaults and persist it.
    pub fn reset(&mut self) -> Option<String> {
        self.prefs = self.store.defaults().clone();
        self.persist()
    }

    pub fn apply(&mut self, action: Action) -> Outcome {
        let mut repaint = Repaint {
            controls: true,
            ..Repaint::default()
        };
        let mut refetch_weather = false;
        let prefs = &mut self.prefs;

        let summary = match action {
            Action::ToggleTheme => {
                prefs.theme = prefs.theme.toggled();
                repaint.theme = true;
                format!("Theme: {}", prefs.theme.label())
            }
            Action::ToggleSeconds => {
                prefs.show_seconds = !prefs.show_seconds;
                repaint.clock = true;
                format!("Seconds {}", on_off(prefs.show_seconds))
            }
            Action::ToggleClockFormat => {
                prefs.use_12_hour_format = !prefs.use_12_hour_format;
                repaint.clock = true;
                if prefs.use_12_hour_format {
                    "12-hour clock".to_string()
                } else {
                    "24-hour clock".to_string()
                }
            }
            Action::ToggleWeather => {
                prefs.show_weather = !prefs.show_weather;
                repaint.weather = true;
                refetch_weather = prefs.show_weather;
                format!("Weather {}", on_off(prefs.show_weather))
            }
            Action::ToggleSilent => {
                prefs.is_silent = !prefs.is_silent;
                format!("Silent {}", on_off(prefs.is_silent))
            }
            Action::ToggleFocus => {
                prefs.is_focus = !prefs.is_focus;
                repaint.layout = true;
                format!("Minimal {}", on_off(prefs.is_focus))
            }
            Action::ToggleAnimations => {
                prefs.animations_enabled = !prefs.animations_enabled;
                repaint.theme = true;
                format!("Animations {}", on_off(prefs.animations_enabled))
            }
            Action::ToggleEffects => {
                prefs.effects_enabled = !prefs.effects_enabled;
                repaint.theme = true;
                format!("Effects {}", on_off(prefs.effects_enabled))
            }
            Action::AdjustTone(delta) => {
                prefs.tone = prefs.tone.saturating_add(delta);
                format!("Tone {}", prefs.tone)
            }
            Action::SetWallpaper(url) => {
                log_debug_content(&format!("wallpaper set to {url}"));
                prefs.wallpaper_url = Some(url).filter(|url| !url.is_empty());
                repaint.wallpaper = true;
                "Wallpaper set".to_string()
            }
            Action::ResetWallpaper => {
                prefs.wallpaper_url = None;
                repaint.wallpaper = true;
                "Wallpaper cleared".to_string()
            }
        };

        let save_error = self.persist();
        Outcome {
            repaint,
            refetch_weather,
            save_error,
            summary,
        }
    }

    fn persist(&mut self) -> Option<String> {
        match self.store.save(&self.prefs) {
            Ok(()) => None,
            Err(err) => {
                let message = format!("{err:#}");
                log_debug(&format!("failed to save preferences: {message}"));
                tracing::warn!(error = %message, "failed to save preferences");
                Some(message)
            }
        }
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
