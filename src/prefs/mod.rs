//! Persisted display preferences and the field-wise merge that loads them.
//!
//! The record has no schema version. Stored values are merged over the
//! defaults key by key, so a field that is missing or has the wrong shape
//! falls back to its default while its neighbours keep their stored values.

mod cookie;
mod document;
mod store;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub use cookie::{CookieBackend, CookieJar, COOKIE_LIFETIME_DAYS};
pub use document::DocumentBackend;
pub use store::{PrefsBackend, PreferencesStore};

/// Light or dark home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// The single durable record behind every rendered element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub show_seconds: bool,
    pub use_12_hour_format: bool,
    pub show_weather: bool,
    pub is_silent: bool,
    pub is_focus: bool,
    pub tone: i64,
    pub animations_enabled: bool,
    pub effects_enabled: bool,
    pub wallpaper_url: Option<String>,
    /// Keys written by other versions; carried through load and save untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            show_seconds: true,
            use_12_hour_format: false,
            show_weather: true,
            is_silent: false,
            is_focus: false,
            tone: 0,
            animations_enabled: true,
            effects_enabled: true,
            wallpaper_url: None,
            extra: BTreeMap::new(),
        }
    }
}

impl Preferences {
    /// Wallpaper URL with blank values treated as unset.
    pub fn wallpaper(&self) -> Option<&str> {
        self.wallpaper_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Overlay `stored` on `defaults` one key at a time.
///
/// A stored value only replaces the default when the record still decodes
/// with it in place. Anything that is not a JSON object yields the defaults.
pub fn merge(defaults: &Preferences, stored: &Value) -> Preferences {
    let Value::Object(stored) = stored else {
        return defaults.clone();
    };
    let mut merged = match serde_json::to_value(defaults) {
        Ok(Value::Object(map)) => map,
        _ => return defaults.clone(),
    };

    for (key, value) in stored {
        let previous = merged.insert(key.clone(), value.clone());
        if decode(&merged).is_none() {
            match previous {
                Some(previous) => {
                    merged.insert(key.clone(), previous);
                }
                None => {
                    merged.remove(key);
                }
            }
        }
    }

    let mut prefs = decode(&merged).unwrap_or_else(|| defaults.clone());
    // Empty wallpaper text and no wallpaper are the same record.
    if prefs.wallpaper_url.as_deref() == Some("") {
        prefs.wallpaper_url = None;
    }
    prefs
}

fn decode(map: &Map<String, Value>) -> Option<Preferences> {
    serde_json::from_value(Value::Object(map.clone())).ok()
}
