//! Dark and light palettes, plus the dimmed variant used behind the drawer.

use polygol_mini::render::Appearance;
use polygol_mini::Theme;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Colors for one home-screen theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Palette {
    pub(crate) background: Color,
    pub(crate) foreground: Color,
    /// Secondary text (date, hints)
    pub(crate) muted: Color,
    pub(crate) accent: Color,
    /// Panel body for the shade and drawer
    pub(crate) surface: Color,
    pub(crate) tile_on: Color,
    pub(crate) tile_off: Color,
    pub(crate) warning: Color,
}

pub(crate) const PALETTE_DARK: Palette = Palette {
    background: Color::Rgb(12, 12, 16),
    foreground: Color::Rgb(235, 235, 240),
    muted: Color::Rgb(140, 140, 150),
    accent: Color::Rgb(120, 170, 255),
    surface: Color::Rgb(28, 28, 36),
    tile_on: Color::Rgb(120, 170, 255),
    tile_off: Color::Rgb(60, 60, 72),
    warning: Color::Rgb(255, 170, 90),
};

pub(crate) const PALETTE_LIGHT: Palette = Palette {
    background: Color::Rgb(244, 244, 246),
    foreground: Color::Rgb(20, 20, 26),
    muted: Color::Rgb(100, 100, 110),
    accent: Color::Rgb(30, 100, 220),
    surface: Color::Rgb(255, 255, 255),
    tile_on: Color::Rgb(30, 100, 220),
    tile_off: Color::Rgb(210, 210, 218),
    warning: Color::Rgb(190, 90, 0),
};

impl Palette {
    pub(crate) fn for_appearance(appearance: &Appearance) -> Self {
        match appearance.theme {
            Theme::Dark => PALETTE_DARK,
            Theme::Light => PALETTE_LIGHT,
        }
    }

    /// Home screen as seen through the open drawer.
    pub(crate) fn dimmed(self) -> Self {
        Self {
            foreground: self.muted,
            accent: self.muted,
            ..self
        }
    }

    pub(crate) fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub(crate) fn panel(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.surface)
    }

    pub(crate) fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub(crate) fn accent(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn tile(&self, active: bool, selected: bool) -> Style {
        let mut style = if active {
            Style::default().fg(self.background).bg(self.tile_on)
        } else {
            Style::default().fg(self.foreground).bg(self.tile_off)
        };
        if selected {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        style
    }
}

/// Rounded borders with effects on; plain ones in reduced-effects mode.
pub(crate) fn border_type(appearance: &Appearance) -> BorderType {
    if appearance.reduced_effects {
        BorderType::Plain
    } else {
        BorderType::Rounded
    }
}
