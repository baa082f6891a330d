//! Quick-control tiles shown in the shade.

use crate::handlers::Action;
use crate::i18n::Language;
use crate::prefs::{Preferences, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    Silent,
    Tone,
    Minimal,
    Daylight,
    Seconds,
    TwentyFourHour,
    Weather,
    Motion,
    Effects,
    Wallpaper,
}

/// Tile order in the shade grid.
pub const CONTROLS: [ControlId; 10] = [
    ControlId::Silent,
    ControlId::Tone,
    ControlId::Minimal,
    ControlId::Daylight,
    ControlId::Seconds,
    ControlId::TwentyFourHour,
    ControlId::Weather,
    ControlId::Motion,
    ControlId::Effects,
    ControlId::Wallpaper,
];

/// What activating a tile asks the UI to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileCommand {
    Apply(Action),
    /// Open the wallpaper text prompt.
    EditWallpaper,
}

/// One tile as drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: ControlId,
    pub label: String,
    pub glyph: &'static str,
    pub active: bool,
    /// Extra text after the label, e.g. the tone value.
    pub detail: Option<String>,
}

impl ControlId {
    fn label_key(self) -> &'static str {
        match self {
            ControlId::Silent => "SILENT",
            ControlId::Tone => "TONE",
            ControlId::Minimal => "MINIMAL",
            ControlId::Daylight => "DAYLIGHT",
            ControlId::Seconds => "SECONDS",
            ControlId::TwentyFourHour => "24H",
            ControlId::Weather => "WEATHER",
            ControlId::Motion => "MOTION",
            ControlId::Effects => "EFFECTS",
            ControlId::Wallpaper => "WALLPAPER",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            ControlId::Silent => "🔕",
            ControlId::Tone => "♪",
            ControlId::Minimal => "◐",
            ControlId::Daylight => "☀",
            ControlId::Seconds => "⏱",
            ControlId::TwentyFourHour => "⌚",
            ControlId::Weather => "☁",
            ControlId::Motion => "↯",
            ControlId::Effects => "✦",
            ControlId::Wallpaper => "▣",
        }
    }

    pub fn is_active(self, prefs: &Preferences) -> bool {
        match self {
            ControlId::Silent => prefs.is_silent,
            ControlId::Tone => prefs.tone != 0,
            ControlId::Minimal => prefs.is_focus,
            ControlId::Daylight => prefs.theme == Theme::Light,
            ControlId::Seconds => prefs.show_seconds,
            ControlId::TwentyFourHour => !prefs.use_12_hour_format,
            ControlId::Weather => prefs.show_weather,
            ControlId::Motion => prefs.animations_enabled,
            ControlId::Effects => prefs.effects_enabled,
            ControlId::Wallpaper => prefs.wallpaper().is_some(),
        }
    }

    /// Tone steps up by one; a set wallpaper is cleared, an empty one prompts.
    pub fn command(self, prefs: &Preferences) -> TileCommand {
        let action = match self {
            ControlId::Silent => Action::ToggleSilent,
            ControlId::Tone => Action::AdjustTone(1),
            ControlId::Minimal => Action::ToggleFocus,
            ControlId::Daylight => Action::ToggleTheme,
            ControlId::Seconds => Action::ToggleSeconds,
            ControlId::TwentyFourHour => Action::ToggleClockFormat,
            ControlId::Weather => Action::ToggleWeather,
            ControlId::Motion => Action::ToggleAnimations,
            ControlId::Effects => Action::ToggleEffects,
            ControlId::Wallpaper => {
                if prefs.wallpaper().is_some() {
                    Action::ResetWallpaper
                } else {
                    return TileCommand::EditWallpaper;
                }
            }
        };
        TileCommand::Apply(action)
    }
}

pub fn build_tiles(prefs: &Preferences, lang: Language) -> Vec<Tile> {
    CONTROLS
        .iter()
        .map(|&id| Tile {
            id,
            label: lang.label(id.label_key()).to_string(),
            glyph: id.glyph(),
            active: id.is_active(prefs),
            detail: (id == ControlId::Tone).then(|| prefs.tone.to_string()),
        })
        .collect()
}

/// Grid cursor over [`CONTROLS`], `columns` tiles per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlCursor {
    index: usize,
    columns: usize,
}

impl ControlCursor {
    pub fn new(columns: usize) -> Self {
        Self {
            index: 0,
            columns: columns.max(1),
        }
    }

    pub fn selected(&self) -> ControlId {
        CONTROLS[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn select(&mut self, index: usize) {
        if index < CONTROLS.len() {
            self.index = index;
        }
    }

    pub fn left(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.index = (self.index + 1).min(CONTROLS.len() - 1);
    }

    pub fn up(&mut self) {
        self.index = self.index.saturating_sub(self.columns);
    }

    pub fn down(&mut self) {
        let next = self.index + self.columns;
        if next < CONTROLS.len() {
            self.index = next;
        }
    }
}
