//! Frame drawing. Reads [`UiState`] and never mutates it.

use chrono::NaiveDateTime;
use polygol_mini::apps::APP_CATALOG;
use polygol_mini::controls::build_tiles;
use polygol_mini::render::{
    format_clock, format_date, format_shade_clock, format_shade_date, render_theme,
    render_wallpaper, render_weather, Appearance, WallpaperView, WeatherView,
};
use polygol_mini::shell::Panel;
use polygol_mini::utf8_safe::{fit_columns, tail_columns};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::event_state::UiState;
use crate::layout::{compute_layout, ScreenLayout};
use crate::theme::{border_type, Palette};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub(crate) fn draw(frame: &mut Frame<'_>, ui: &UiState, now: NaiveDateTime) {
    let layout = compute_layout(frame.size(), &ui.shell);
    let prefs = ui.controller.prefs();
    let appearance = render_theme(prefs);
    let palette = Palette::for_appearance(&appearance);
    let drawer_open = ui.shell.is_open(Panel::Drawer);
    let home_palette = if drawer_open && !appearance.reduced_effects {
        palette.dimmed()
    } else {
        palette
    };

    frame.render_widget(Block::default().style(home_palette.base()), layout.area);
    if let Some(bar) = layout.top_bar {
        draw_top_bar(frame, ui, bar, &home_palette, now);
    }
    draw_home(frame, ui, layout.home, &home_palette, &appearance, now);
    if let Some(pill) = layout.pill {
        draw_pill(frame, ui, pill, &home_palette);
    }
    if let Some(drawer) = layout.drawer {
        draw_drawer(frame, ui, drawer, &layout, &palette, &appearance);
    }
    if let Some(shade) = layout.shade {
        draw_shade(frame, ui, shade, &layout, &palette, &appearance, now);
    }
    if ui.prompt.is_some() {
        draw_prompt(frame, ui, layout.area, &palette, &appearance);
    }
}

fn draw_top_bar(frame: &mut Frame<'_>, ui: &UiState, area: Rect, palette: &Palette, now: NaiveDateTime) {
    let prefs = ui.controller.prefs();
    let mut left = vec![Span::styled(" ▾ ", palette.accent())];
    if prefs.is_silent {
        left.push(Span::styled("🔕 ", palette.muted()));
    }
    frame.render_widget(Paragraph::new(Line::from(left)), area);
    let clock = format_shade_clock(now.time(), prefs);
    frame.render_widget(
        Paragraph::new(format!("{clock} "))
            .style(palette.muted())
            .alignment(Alignment::Right),
        area,
    );
}

fn draw_home(
    frame: &mut Frame<'_>,
    ui: &UiState,
    area: Rect,
    palette: &Palette,
    appearance: &Appearance,
    now: NaiveDateTime,
) {
    let prefs = ui.controller.prefs();
    let mut lines = Vec::new();
    let top_padding = area.height.saturating_sub(6) / 2;
    lines.extend((0..top_padding).map(|_| Line::from("")));
    lines.push(Line::styled(format_clock(now.time(), prefs), palette.accent()));
    if !prefs.is_focus {
        lines.push(Line::styled(format_date(now.date()), Style::default().fg(palette.foreground)));
        if let Some(text) = weather_text(ui, appearance) {
            lines.push(Line::styled(text, palette.muted()));
        }
    }
    if let WallpaperView::Cover { url } = render_wallpaper(prefs) {
        let width = (area.width as usize).saturating_sub(6);
        lines.push(Line::from(""));
        lines.push(Line::styled(format!("▣ {}", fit_columns(&url, width)), palette.muted()));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn weather_text(ui: &UiState, appearance: &Appearance) -> Option<String> {
    match render_weather(&ui.weather, ui.controller.prefs()) {
        WeatherView::Hidden => None,
        WeatherView::Pending => Some(if appearance.reduced_animations {
            "…".to_string()
        } else {
            SPINNER[(ui.frame % SPINNER.len() as u64) as usize].to_string()
        }),
        WeatherView::Unavailable => Some(ui.lang.label("UNAVAILABLE").to_string()),
        WeatherView::Shown { temperature, icon } => Some(format!("{} {temperature}°", icon.glyph())),
    }
}

fn draw_pill(frame: &mut Frame<'_>, ui: &UiState, area: Rect, palette: &Palette) {
    let prefs = ui.controller.prefs();
    let mut spans = vec![Span::styled("━━━━━━", palette.accent())];
    if let Some(status) = &ui.status {
        let style = if status.is_error {
            Style::default().fg(palette.warning)
        } else {
            palette.muted()
        };
        spans.push(Span::styled(format!("  {}", status.text), style));
    } else if !prefs.is_focus {
        spans.push(Span::styled("  ↑ a: apps · s: controls · q: quit", palette.muted()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}

fn panel_block<'a>(title: &'a str, palette: &Palette, appearance: &Appearance) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(border_type(appearance))
        .border_style(Style::default().fg(palette.accent))
        .title(Span::styled(format!(" {title} "), palette.accent()))
        .style(palette.panel())
}

fn draw_shade(
    frame: &mut Frame<'_>,
    ui: &UiState,
    area: Rect,
    layout: &ScreenLayout,
    palette: &Palette,
    appearance: &Appearance,
    now: NaiveDateTime,
) {
    let prefs = ui.controller.prefs();
    frame.render_widget(Clear, area);
    frame.render_widget(panel_block(ui.lang.label("CONTROLS"), palette, appearance), area);

    if let Some(header) = layout.shade_header {
        let text = format!(
            "{}  {}",
            format_shade_clock(now.time(), prefs),
            format_shade_date(now.date())
        );
        frame.render_widget(Paragraph::new(text).style(palette.muted()), header);
    }

    let tiles = build_tiles(prefs, ui.lang);
    for (index, (tile, rect)) in tiles.iter().zip(layout.tiles.iter()).enumerate() {
        let selected = index == ui.cursor.index();
        let style = palette.tile(tile.active, selected);
        let width = (rect.width as usize).saturating_sub(2);
        let label = match &tile.detail {
            Some(detail) => format!("{} {detail}", tile.label),
            None => tile.label.clone(),
        };
        let lines = vec![
            Line::from(tile.glyph),
            Line::from(fit_columns(&label, width)),
        ];
        let cell = Rect::new(rect.x, rect.y, rect.width.saturating_sub(1), rect.height);
        frame.render_widget(
            Paragraph::new(lines)
                .style(style)
                .alignment(Alignment::Center),
            cell,
        );
    }

    if let (Some(row), Some(status)) = (layout.shade_status, &ui.status) {
        let style = if status.is_error {
            Style::default().fg(palette.warning)
        } else {
            palette.muted()
        };
        let width = row.width as usize;
        frame.render_widget(Paragraph::new(fit_columns(&status.text, width)).style(style), row);
    }
}

fn draw_drawer(
    frame: &mut Frame<'_>,
    ui: &UiState,
    area: Rect,
    layout: &ScreenLayout,
    palette: &Palette,
    appearance: &Appearance,
) {
    frame.render_widget(Clear, area);
    frame.render_widget(panel_block(ui.lang.label("APPS"), palette, appearance), area);
    for (index, (entry, rect)) in APP_CATALOG.iter().zip(layout.app_rows.iter()).enumerate() {
        let style = if index == ui.selected_app {
            palette.accent()
        } else {
            Style::default().fg(palette.foreground)
        };
        let marker = if index == ui.selected_app { "›" } else { " " };
        frame.render_widget(
            Paragraph::new(format!("{marker} {} {}", entry.glyph, entry.name)).style(style),
            *rect,
        );
    }
}

fn draw_prompt(frame: &mut Frame<'_>, ui: &UiState, area: Rect, palette: &Palette, appearance: &Appearance) {
    let Some(prompt) = &ui.prompt else {
        return;
    };
    let rect = prompt_rect(area);
    let inner_width = (rect.width as usize).saturating_sub(3);
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(format!("{}▏", tail_columns(&prompt.buffer, inner_width)))
            .block(panel_block(ui.lang.label("WALLPAPER"), palette, appearance)),
        rect,
    );
}

/// Centered three-row box for the wallpaper prompt.
fn prompt_rect(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).max(1);
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(3) / 2,
        width,
        3.min(area.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_state::tests::state;
    use chrono::NaiveDate;
    use polygol_mini::weather::{WeatherMessage, WeatherReading};
    use polygol_mini::Action;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::time::Instant;

    fn moment() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .and_then(|d| d.and_hms_opt(13, 5, 9))
            .expect("valid moment")
    }

    fn render(ui: &UiState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal
            .draw(|frame| draw(frame, ui, moment()))
            .expect("draw");
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn home_shows_clock_date_and_pending_weather() {
        let ui = state("draw_home");
        let text = render(&ui, 60, 20);
        assert!(text.contains("13:05:09"), "{text}");
        assert!(text.contains("Friday, October 16"), "{text}");
        assert!(text.contains("a: apps"), "{text}");
    }

    #[test]
    fn weather_reading_is_rounded_with_icon() {
        let mut ui = state("draw_weather");
        ui.weather.apply(WeatherMessage::Reading(WeatherReading {
            temperature_celsius: 12.5,
            condition_code: 800,
        }));
        let text = render(&ui, 60, 20);
        assert!(text.contains("☀ 13°"), "{text}");

        ui.apply(Action::ToggleWeather, Instant::now());
        let text = render(&ui, 60, 20);
        assert!(!text.contains("13°"), "{text}");
    }

    #[test]
    fn focus_mode_hides_date_and_hint() {
        let mut ui = state("draw_focus");
        ui.apply(Action::ToggleFocus, Instant::now());
        ui.status = None;
        let text = render(&ui, 60, 20);
        assert!(text.contains("13:05:09"), "{text}");
        assert!(!text.contains("October"), "{text}");
        assert!(!text.contains("a: apps"), "{text}");
    }

    #[test]
    fn twelve_hour_clock_without_seconds() {
        let mut ui = state("draw_12h");
        ui.apply(Action::ToggleClockFormat, Instant::now());
        ui.apply(Action::ToggleSeconds, Instant::now());
        let text = render(&ui, 60, 20);
        assert!(text.contains("1:05 PM"), "{text}");
        assert!(!text.contains("13:05"), "{text}");
    }

    #[test]
    fn shade_lists_tiles_and_compact_header() {
        let mut ui = state("draw_shade");
        ui.shell.open(Panel::Shade);
        let text = render(&ui, 80, 24);
        assert!(text.contains("Controls"), "{text}");
        assert!(text.contains("Fri, Oct 16"), "{text}");
        assert!(text.contains("Silent"), "{text}");
        assert!(text.contains("Tone 0"), "{text}");
    }

    #[test]
    fn drawer_hides_top_bar_and_lists_apps() {
        let mut ui = state("draw_drawer");
        ui.shell.open(Panel::Drawer);
        let text = render(&ui, 80, 24);
        assert!(text.contains("App Store"), "{text}");
        assert!(text.contains("Maps"), "{text}");
        assert!(!text.contains(" ▾ "), "{text}");
        assert!(!text.contains("a: apps"), "{text}");
    }

    #[test]
    fn spanish_labels_in_shade() {
        let mut ui = state("draw_es");
        ui.lang = polygol_mini::i18n::Language::Es;
        ui.shell.open(Panel::Shade);
        let text = render(&ui, 80, 24);
        assert!(text.contains("Controles"), "{text}");
        assert!(text.contains("Silencio"), "{text}");
    }

    #[test]
    fn prompt_shows_typed_text() {
        let mut ui = state("draw_prompt");
        ui.open_prompt();
        if let Some(prompt) = ui.prompt.as_mut() {
            prompt.buffer.push_str("https://example.com/x.png");
        }
        let text = render(&ui, 60, 20);
        assert!(text.contains("https://example.com/x.png"), "{text}");
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut ui = state("draw_tiny");
        ui.shell.open(Panel::Shade);
        ui.shell.open(Panel::Drawer);
        ui.open_prompt();
        render(&ui, 3, 2);
        render(&ui, 1, 1);
    }

    #[test]
    fn prompt_box_fits_degenerate_areas() {
        assert_eq!(prompt_rect(Rect::new(0, 0, 0, 10)), Rect::new(0, 3, 1, 3));
        assert_eq!(prompt_rect(Rect::new(2, 1, 1, 1)), Rect::new(2, 1, 1, 1));
        assert_eq!(prompt_rect(Rect::new(0, 0, 60, 20)), Rect::new(2, 8, 56, 3));
    }
}
