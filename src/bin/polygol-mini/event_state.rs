use std::time::{Duration, Instant};

use polygol_mini::apps::{launch_message, APP_CATALOG};
use polygol_mini::controls::{ControlCursor, ControlId, TileCommand, CONTROLS};
use polygol_mini::i18n::Language;
use polygol_mini::shell::{Gesture, Panel, ShellState, SwipeTracker};
use polygol_mini::weather::WeatherPanel;
use polygol_mini::{log_debug, Action, PrefsController};

use crate::layout::TILE_COLUMNS;

const STATUS_TTL: Duration = Duration::from_secs(3);

/// Text being typed into the wallpaper prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct WallpaperPrompt {
    pub(crate) buffer: String,
}

/// Transient line shown in the shade and bottom bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusMessage {
    pub(crate) text: String,
    pub(crate) is_error: bool,
    pub(crate) expires_at: Instant,
}

/// Side effects the event loop performs after a state change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Effects {
    pub(crate) redraw: bool,
    pub(crate) fetch_weather: bool,
    pub(crate) quit: bool,
}

impl Effects {
    pub(crate) fn redraw() -> Self {
        Self {
            redraw: true,
            ..Self::default()
        }
    }

    pub(crate) fn merge(self, other: Effects) -> Self {
        Self {
            redraw: self.redraw || other.redraw,
            fetch_weather: self.fetch_weather || other.fetch_weather,
            quit: self.quit || other.quit,
        }
    }
}

/// Everything the UI thread owns.
pub(crate) struct UiState {
    pub(crate) controller: PrefsController,
    pub(crate) shell: ShellState,
    pub(crate) weather: WeatherPanel,
    pub(crate) cursor: ControlCursor,
    pub(crate) selected_app: usize,
    pub(crate) prompt: Option<WallpaperPrompt>,
    pub(crate) status: Option<StatusMessage>,
    pub(crate) swipe: SwipeTracker,
    pub(crate) lang: Language,
    /// Advances once per clock tick; drives the pending-weather spinner.
    pub(crate) frame: u64,
}

impl UiState {
    pub(crate) fn new(controller: PrefsController, lang: Language) -> Self {
        Self {
            controller,
            shell: ShellState::default(),
            weather: WeatherPanel::default(),
            cursor: ControlCursor::new(TILE_COLUMNS),
            selected_app: 0,
            prompt: None,
            status: None,
            swipe: SwipeTracker::default(),
            lang,
            frame: 0,
        }
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, is_error: bool, now: Instant) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error,
            expires_at: now + STATUS_TTL,
        });
    }

    /// Drop an expired status; true when something was cleared.
    pub(crate) fn expire_status(&mut self, now: Instant) -> bool {
        if self.status.as_ref().is_some_and(|s| now >= s.expires_at) {
            self.status = None;
            return true;
        }
        false
    }

    pub(crate) fn status_deadline(&self) -> Option<Instant> {
        self.status.as_ref().map(|s| s.expires_at)
    }

    /// Run a preference action and surface its outcome.
    pub(crate) fn apply(&mut self, action: Action, now: Instant) -> Effects {
        let outcome = self.controller.apply(action);
        match outcome.save_error {
            Some(err) => self.set_status(format!("Could not save: {err}"), true, now),
            None => self.set_status(outcome.summary, false, now),
        }
        Effects {
            redraw: true,
            fetch_weather: outcome.refetch_weather,
            quit: false,
        }
    }

    pub(crate) fn activate_tile(&mut self, id: ControlId, now: Instant) -> Effects {
        if let Some(index) = CONTROLS.iter().position(|&c| c == id) {
            self.cursor.select(index);
        }
        match id.command(self.controller.prefs()) {
            TileCommand::Apply(action) => self.apply(action, now),
            TileCommand::EditWallpaper => {
                self.open_prompt();
                Effects::redraw()
            }
        }
    }

    pub(crate) fn toggle_panel(&mut self, panel: Panel) -> Effects {
        self.shell.toggle(panel);
        log_debug(&format!(
            "{panel:?} {}",
            if self.shell.is_open(panel) { "opened" } else { "closed" }
        ));
        Effects::redraw()
    }

    pub(crate) fn apply_gesture(&mut self, gesture: Gesture) -> Effects {
        self.shell.open(gesture.panel());
        Effects::redraw()
    }

    pub(crate) fn launch_app(&mut self, index: usize, now: Instant) -> Effects {
        let Some(entry) = APP_CATALOG.get(index) else {
            return Effects::default();
        };
        self.selected_app = index;
        let message = launch_message(entry, self.lang.label("NOT_AVAILABLE"));
        self.set_status(message, false, now);
        Effects::redraw()
    }

    pub(crate) fn move_app_selection(&mut self, delta: isize) {
        let last = APP_CATALOG.len() - 1;
        self.selected_app = self.selected_app.saturating_add_signed(delta).min(last);
    }

    pub(crate) fn open_prompt(&mut self) {
        let current = self
            .controller
            .prefs()
            .wallpaper()
            .unwrap_or_default()
            .to_string();
        self.prompt = Some(WallpaperPrompt { buffer: current });
    }

    /// Commit the prompt; blank text clears the wallpaper.
    pub(crate) fn submit_prompt(&mut self, now: Instant) -> Effects {
        let Some(prompt) = self.prompt.take() else {
            return Effects::default();
        };
        let text = prompt.buffer.trim().to_string();
        let action = if text.is_empty() {
            Action::ResetWallpaper
        } else {
            Action::SetWallpaper(text)
        };
        self.apply(action, now)
    }

    /// Esc: the prompt first, then the topmost panel.
    pub(crate) fn dismiss(&mut self) -> Effects {
        if self.prompt.take().is_some() || self.shell.dismiss_top() {
            return Effects::redraw();
        }
        Effects::default()
    }
}
