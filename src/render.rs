//! Pure render functions: preferences, time, and weather in; display values out.
//!
//! Nothing here touches the terminal, so every visible string can be checked
//! in tests without a live UI.

use crate::prefs::{Preferences, Theme};
use crate::weather::{WeatherPanel, WeatherReading};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Visual mode derived from the theme and performance toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub theme: Theme,
    pub reduced_effects: bool,
    pub reduced_animations: bool,
}

impl Appearance {
    pub fn is_light(&self) -> bool {
        self.theme == Theme::Light
    }
}

/// Icon category for a weather condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Rainy,
    Snowy,
    Clear,
    Cloudy,
}

impl WeatherIcon {
    pub fn label(self) -> &'static str {
        match self {
            WeatherIcon::Rainy => "rainy",
            WeatherIcon::Snowy => "snowy",
            WeatherIcon::Clear => "clear",
            WeatherIcon::Cloudy => "cloudy",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            WeatherIcon::Rainy => "☂",
            WeatherIcon::Snowy => "❄",
            WeatherIcon::Clear => "☀",
            WeatherIcon::Cloudy => "☁",
        }
    }
}

/// What the weather badge shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherView {
    Hidden,
    Pending,
    Unavailable,
    Shown { temperature: i64, icon: WeatherIcon },
}

/// Background image settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WallpaperView {
    Cleared,
    /// Scaled to cover the screen, centered.
    Cover { url: String },
}

/// `HH:MM[:SS]` in 24-hour mode, `H:MM[:SS] AM|PM` in 12-hour mode.
pub fn format_clock(time: NaiveTime, prefs: &Preferences) -> String {
    format_time(time, prefs.use_12_hour_format, prefs.show_seconds)
}

/// Compact clock for the shade header; never shows seconds.
pub fn format_shade_clock(time: NaiveTime, prefs: &Preferences) -> String {
    format_time(time, prefs.use_12_hour_format, false)
}

fn format_time(time: NaiveTime, twelve_hour: bool, seconds: bool) -> String {
    let minute = time.minute();
    let second = time.second();
    if twelve_hour {
        let (is_pm, hour) = time.hour12();
        let meridiem = if is_pm { "PM" } else { "AM" };
        if seconds {
            format!("{hour}:{minute:02}:{second:02} {meridiem}")
        } else {
            format!("{hour}:{minute:02} {meridiem}")
        }
    } else {
        let hour = time.hour();
        if seconds {
            format!("{hour:02}:{minute:02}:{second:02}")
        } else {
            format!("{hour:02}:{minute:02}")
        }
    }
}

/// Full weekday, month name, and day of month: `Friday, October 16`.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {}",
        WEEKDAYS[date.weekday().num_days_from_sunday() as usize],
        MONTHS[date.month0() as usize],
        date.day()
    )
}

/// Abbreviated date for the shade header: `Fri, Oct 16`.
pub fn format_shade_date(date: NaiveDate) -> String {
    let weekday = WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    let month = MONTHS[date.month0() as usize];
    format!("{}, {} {}", &weekday[..3], &month[..3], date.day())
}

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn render_theme(prefs: &Preferences) -> Appearance {
    Appearance {
        theme: prefs.theme,
        reduced_effects: !prefs.effects_enabled,
        reduced_animations: !prefs.animations_enabled,
    }
}

/// Map a condition code onto the four icon categories.
pub fn weather_icon(code: i64) -> WeatherIcon {
    match code {
        200..=599 => WeatherIcon::Rainy,
        600..=699 => WeatherIcon::Snowy,
        800 => WeatherIcon::Clear,
        _ => WeatherIcon::Cloudy,
    }
}

/// Round half up, matching how the badge has always rounded.
pub fn round_temperature(celsius: f64) -> i64 {
    (celsius + 0.5).floor() as i64
}

pub fn render_reading(reading: &WeatherReading) -> WeatherView {
    WeatherView::Shown {
        temperature: round_temperature(reading.temperature_celsius),
        icon: weather_icon(reading.condition_code),
    }
}

pub fn render_weather(panel: &WeatherPanel, prefs: &Preferences) -> WeatherView {
    if !prefs.show_weather {
        return WeatherView::Hidden;
    }
    match panel.latest() {
        Some(reading) => render_reading(reading),
        None if panel.is_unavailable() => WeatherView::Unavailable,
        None => WeatherView::Pending,
    }
}

pub fn render_wallpaper(prefs: &Preferences) -> WallpaperView {
    match prefs.wallpaper() {
        Some(url) => WallpaperView::Cover {
            url: url.to_string(),
        },
        None => WallpaperView::Cleared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).expect("valid time")
    }

    fn prefs(twelve_hour: bool, seconds: bool) -> Preferences {
        Preferences {
            use_12_hour_format: twelve_hour,
            show_seconds: seconds,
            ..Preferences::default()
        }
    }

    #[test]
    fn clock_24h_pads_every_component() {
        assert_eq!(format_clock(time(0, 5, 9), &prefs(false, true)), "00:05:09");
        assert_eq!(format_clock(time(0, 5, 9), &prefs(false, false)), "00:05");
        assert_eq!(format_clock(time(23, 59, 0), &prefs(false, true)), "23:59:00");
    }

    #[test]
    fn clock_12h_drops_hour_padding() {
        assert_eq!(format_clock(time(13, 5, 0), &prefs(true, false)), "1:05 PM");
        assert_eq!(format_clock(time(13, 5, 7), &prefs(true, true)), "1:05:07 PM");
        assert_eq!(format_clock(time(0, 30, 0), &prefs(true, false)), "12:30 AM");
        assert_eq!(format_clock(time(12, 0, 0), &prefs(true, false)), "12:00 PM");
    }

    #[test]
    fn shade_clock_never_shows_seconds() {
        assert_eq!(format_shade_clock(time(9, 4, 59), &prefs(false, true)), "09:04");
        assert_eq!(format_shade_clock(time(21, 4, 59), &prefs(true, true)), "9:04 PM");
    }

    #[test]
    fn dates_spell_out_weekday_and_month() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date");
        assert_eq!(format_date(date), "Friday, October 16");
        assert_eq!(format_shade_date(date), "Fri, Oct 16");
        let date = NaiveDate::from_ymd_opt(2025, 3, 2).expect("valid date");
        assert_eq!(format_date(date), "Sunday, March 2");
    }

    #[test]
    fn theme_reflects_performance_toggles() {
        let appearance = render_theme(&Preferences::default());
        assert!(!appearance.is_light());
        assert!(!appearance.reduced_effects);
        assert!(!appearance.reduced_animations);

        let appearance = render_theme(&Preferences {
            theme: Theme::Light,
            effects_enabled: false,
            animations_enabled: false,
            ..Preferences::default()
        });
        assert!(appearance.is_light());
        assert!(appearance.reduced_effects);
        assert!(appearance.reduced_animations);
    }

    #[test]
    fn condition_codes_map_to_icons() {
        assert_eq!(weather_icon(201), WeatherIcon::Rainy);
        assert_eq!(weather_icon(200), WeatherIcon::Rainy);
        assert_eq!(weather_icon(599), WeatherIcon::Rainy);
        assert_eq!(weather_icon(650), WeatherIcon::Snowy);
        assert_eq!(weather_icon(700), WeatherIcon::Cloudy);
        assert_eq!(weather_icon(800), WeatherIcon::Clear);
        assert_eq!(weather_icon(801), WeatherIcon::Cloudy);
        assert_eq!(weather_icon(999), WeatherIcon::Cloudy);
        assert_eq!(weather_icon(0), WeatherIcon::Cloudy);
        assert_eq!(weather_icon(650).label(), "snowy");
    }

    #[test]
    fn temperatures_round_half_up() {
        assert_eq!(round_temperature(12.4), 12);
        assert_eq!(round_temperature(12.5), 13);
        assert_eq!(round_temperature(-2.5), -2);
        assert_eq!(round_temperature(-2.6), -3);
    }

    #[test]
    fn weather_hidden_when_disabled_regardless_of_reading() {
        let mut panel = WeatherPanel::default();
        panel.record(WeatherReading {
            temperature_celsius: 20.0,
            condition_code: 800,
        });
        let hidden = Preferences {
            show_weather: false,
            ..Preferences::default()
        };
        assert_eq!(render_weather(&panel, &hidden), WeatherView::Hidden);
        assert_eq!(
            render_weather(&panel, &Preferences::default()),
            WeatherView::Shown {
                temperature: 20,
                icon: WeatherIcon::Clear
            }
        );
    }

    #[test]
    fn weather_pending_then_unavailable() {
        let mut panel = WeatherPanel::default();
        assert_eq!(
            render_weather(&panel, &Preferences::default()),
            WeatherView::Pending
        );
        panel.record_failure("offline");
        assert_eq!(
            render_weather(&panel, &Preferences::default()),
            WeatherView::Unavailable
        );
    }

    #[test]
    fn wallpaper_cover_or_cleared() {
        assert_eq!(render_wallpaper(&Preferences::default()), WallpaperView::Cleared);
        let prefs = Preferences {
            wallpaper_url: Some("https://example.com/bg.png".to_string()),
            ..Preferences::default()
        };
        assert_eq!(
            render_wallpaper(&prefs),
            WallpaperView::Cover {
                url: "https://example.com/bg.png".to_string()
            }
        );
        let prefs = Preferences {
            wallpaper_url: Some(String::new()),
            ..Preferences::default()
        };
        assert_eq!(render_wallpaper(&prefs), WallpaperView::Cleared);
    }
}
