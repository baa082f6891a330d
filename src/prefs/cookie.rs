//! Per-field storage modelled on browser cookies: one `name=value` line per
//! preference, each with its own expiry.

use super::store::PrefsBackend;
use super::Preferences;
use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const COOKIE_LIFETIME_DAYS: i64 = 365;

const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// How a record key is written as a cookie.
#[derive(Clone, Copy)]
enum Encoding {
    Switch,
    Integer,
    Text,
}

/// Record key, cookie name, and value encoding for every known field.
/// The first five cookie names match what older builds wrote.
const FIELDS: &[(&str, &str, Encoding)] = &[
    ("theme", "theme", Encoding::Text),
    ("animationsEnabled", "animations", Encoding::Switch),
    ("effectsEnabled", "effects", Encoding::Switch),
    ("showWeather", "showWeather", Encoding::Switch),
    ("wallpaperUrl", "wallpaper", Encoding::Text),
    ("showSeconds", "showSeconds", Encoding::Switch),
    ("use12HourFormat", "use12HourFormat", Encoding::Switch),
    ("isSilent", "isSilent", Encoding::Switch),
    ("isFocus", "isFocus", Encoding::Switch),
    ("tone", "tone", Encoding::Integer),
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Cookie {
    name: String,
    value: String,
    expires: Option<DateTime<Utc>>,
}

/// Cookie lines that were still live when the jar was read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    cookies: Vec<Cookie>,
}

impl CookieJar {
    /// Parse jar text, dropping cookies that expired at or before `now`.
    pub fn parse(text: &str, now: DateTime<Utc>) -> Self {
        let mut jar = CookieJar::default();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.split(';');
            let Some((name, raw_value)) = parts.next().and_then(|pair| pair.split_once('=')) else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let expires = parts.find_map(|attr| {
                let (key, value) = attr.split_once('=')?;
                if !key.trim().eq_ignore_ascii_case("expires") {
                    return None;
                }
                DateTime::parse_from_rfc2822(value.trim())
                    .ok()
                    .map(|at| at.with_timezone(&Utc))
            });
            if expires.is_some_and(|at| at <= now) {
                jar.remove(name);
                continue;
            }
            let value = urlencoding::decode(raw_value.trim())
                .map(Cow::into_owned)
                .unwrap_or_else(|_| raw_value.trim().to_string());
            jar.insert(Cookie {
                name: name.to_string(),
                value,
                expires,
            });
        }
        jar
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|cookie| cookie.name == name)
            .map(|cookie| cookie.value.as_str())
    }

    /// Set a cookie living `days` from `now`. Non-positive lifetimes expire
    /// it immediately, which removes it from the jar.
    pub fn set(&mut self, name: &str, value: &str, days: i64, now: DateTime<Utc>) {
        if days <= 0 {
            self.remove(name);
            return;
        }
        self.insert(Cookie {
            name: name.to_string(),
            value: value.to_string(),
            expires: Some(now + Duration::days(days)),
        });
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cookies.iter().map(|cookie| cookie.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for cookie in &self.cookies {
            out.push_str(&cookie.name);
            out.push('=');
            out.push_str(&urlencoding::encode(&cookie.value));
            if let Some(expires) = cookie.expires {
                out.push_str("; expires=");
                out.push_str(&expires.format(EXPIRES_FORMAT).to_string());
            }
            out.push_str("; path=/\n");
        }
        out
    }

    fn insert(&mut self, cookie: Cookie) {
        match self.cookies.iter_mut().find(|c| c.name == cookie.name) {
            Some(existing) => *existing = cookie,
            None => self.cookies.push(cookie),
        }
    }

    fn remove(&mut self, name: &str) {
        self.cookies.retain(|cookie| cookie.name != name);
    }
}

pub struct CookieBackend {
    path: PathBuf,
}

impl CookieBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_jar(&self, now: DateTime<Utc>) -> Result<Option<CookieJar>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(CookieJar::parse(&raw, now))),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("failed to read {}", self.path.display()))
            }
        }
    }
}

/// Turn a jar into a record object for the merge step.
///
/// Values that cannot be decoded are passed through as text so the merge
/// rejects them and the field keeps its default.
pub(crate) fn jar_to_record(jar: &CookieJar) -> Map<String, Value> {
    let mut record = Map::new();
    for name in jar.names() {
        let Some(raw) = jar.get(name) else { continue };
        let known = FIELDS.iter().find(|(_, cookie_name, _)| *cookie_name == name);
        match known {
            Some((key, _, encoding)) => {
                record.insert((*key).to_string(), decode_value(raw, *encoding));
            }
            None => {
                let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
                record.insert(name.to_string(), value);
            }
        }
    }
    record
}

/// Lay a record out as one cookie per field.
pub(crate) fn record_to_jar(prefs: &Preferences, now: DateTime<Utc>) -> Result<CookieJar> {
    let Value::Object(record) =
        serde_json::to_value(prefs).context("failed to serialize preferences")?
    else {
        return Ok(CookieJar::default());
    };

    let mut jar = CookieJar::default();
    for (key, cookie_name, encoding) in FIELDS {
        let encoded = record.get(*key).and_then(|value| encode_value(value, *encoding));
        match encoded {
            Some(text) if !text.is_empty() => {
                jar.set(cookie_name, &text, COOKIE_LIFETIME_DAYS, now);
            }
            _ => jar.set(cookie_name, "", -1, now),
        }
    }
    for (key, value) in &prefs.extra {
        let text = encode_extra(value)?;
        jar.set(key, &text, COOKIE_LIFETIME_DAYS, now);
    }
    Ok(jar)
}

/// Unknown cookies are read as JSON when they parse and as raw text
/// otherwise, so text that is not JSON goes back out unquoted.
fn encode_extra(value: &Value) -> Result<String> {
    if let Value::String(text) = value {
        if serde_json::from_str::<Value>(text).is_err() {
            return Ok(text.clone());
        }
    }
    serde_json::to_string(value).context("failed to serialize extra preference")
}

fn decode_value(raw: &str, encoding: Encoding) -> Value {
    match encoding {
        Encoding::Switch => match raw {
            "on" => Value::Bool(true),
            "off" => Value::Bool(false),
            other => Value::String(other.to_string()),
        },
        Encoding::Integer => raw
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(raw.to_string())),
        Encoding::Text => Value::String(raw.to_string()),
    }
}

fn encode_value(value: &Value, encoding: Encoding) -> Option<String> {
    match (encoding, value) {
        (Encoding::Switch, Value::Bool(on)) => Some(if *on { "on" } else { "off" }.to_string()),
        (Encoding::Integer, Value::Number(number)) => Some(number.to_string()),
        (Encoding::Text, Value::String(text)) => Some(text.clone()),
        _ => None,
    }
}

impl PrefsBackend for CookieBackend {
    fn read_record(&self) -> Result<Option<Value>> {
        let Some(jar) = self.read_jar(Utc::now())? else {
            return Ok(None);
        };
        if jar.is_empty() {
            return Ok(None);
        }
        Ok(Some(Value::Object(jar_to_record(&jar))))
    }

    fn write_record(&mut self, prefs: &Preferences) -> Result<()> {
        let jar = record_to_jar(prefs, Utc::now())?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let tmp_path = self.path.with_extension("txt.tmp");
        fs::write(&tmp_path, jar.render())
            .with_context(|| format!("failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        Ok(())
    }

    fn label(&self) -> &'static str {
        "cookie"
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
