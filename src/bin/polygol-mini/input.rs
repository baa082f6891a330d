//! Key and mouse handling. Keys are mapped to commands first so the mapping
//! can be tested without a terminal.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use polygol_mini::controls::CONTROLS;
use polygol_mini::shell::Panel;
use polygol_mini::{log_debug, Action};

use crate::event_state::{Effects, UiState};
use crate::layout::{hit_test, swipe_zones, HitTarget, ScreenLayout};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InputCommand {
    Quit,
    Toggle(Panel),
    Dismiss,
    Apply(Action),
    EditWallpaper,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Activate,
    PromptChar(char),
    PromptBackspace,
    PromptSubmit,
}

/// Map a key press; `prompt_open` routes text keys into the prompt.
pub(crate) fn map_key(key: KeyEvent, prompt_open: bool) -> Option<InputCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(InputCommand::Quit),
            _ => None,
        };
    }
    if prompt_open {
        return match key.code {
            KeyCode::Esc => Some(InputCommand::Dismiss),
            KeyCode::Enter => Some(InputCommand::PromptSubmit),
            KeyCode::Backspace => Some(InputCommand::PromptBackspace),
            KeyCode::Char(c) => Some(InputCommand::PromptChar(c)),
            _ => None,
        };
    }
    let command = match key.code {
        KeyCode::Char('q') => InputCommand::Quit,
        KeyCode::Esc => InputCommand::Dismiss,
        KeyCode::Char('s') | KeyCode::Tab => InputCommand::Toggle(Panel::Shade),
        KeyCode::Char('a') | KeyCode::BackTab => InputCommand::Toggle(Panel::Drawer),
        KeyCode::Char('t') => InputCommand::Apply(Action::ToggleTheme),
        KeyCode::Char('c') => InputCommand::Apply(Action::ToggleSeconds),
        KeyCode::Char('h') => InputCommand::Apply(Action::ToggleClockFormat),
        KeyCode::Char('w') => InputCommand::Apply(Action::ToggleWeather),
        KeyCode::Char('m') => InputCommand::Apply(Action::ToggleSilent),
        KeyCode::Char('f') => InputCommand::Apply(Action::ToggleFocus),
        KeyCode::Char('n') => InputCommand::Apply(Action::ToggleAnimations),
        KeyCode::Char('e') => InputCommand::Apply(Action::ToggleEffects),
        KeyCode::Char('+') | KeyCode::Char('=') => InputCommand::Apply(Action::AdjustTone(1)),
        KeyCode::Char('-') => InputCommand::Apply(Action::AdjustTone(-1)),
        KeyCode::Char('p') => InputCommand::EditWallpaper,
        KeyCode::Char('r') => InputCommand::Apply(Action::ResetWallpaper),
        KeyCode::Left => InputCommand::MoveLeft,
        KeyCode::Right => InputCommand::MoveRight,
        KeyCode::Up => InputCommand::MoveUp,
        KeyCode::Down => InputCommand::MoveDown,
        KeyCode::Enter | KeyCode::Char(' ') => InputCommand::Activate,
        _ => return None,
    };
    Some(command)
}

/// Arrow keys and Enter drive the shade grid when the shade is up,
/// otherwise the drawer list.
pub(crate) fn run_command(ui: &mut UiState, command: InputCommand, now: Instant) -> Effects {
    let shade_open = ui.shell.is_open(Panel::Shade);
    let drawer_open = ui.shell.is_open(Panel::Drawer);
    match command {
        InputCommand::Quit => Effects {
            quit: true,
            ..Effects::default()
        },
        InputCommand::Toggle(panel) => ui.toggle_panel(panel),
        InputCommand::Dismiss => ui.dismiss(),
        InputCommand::Apply(action) => ui.apply(action, now),
        InputCommand::EditWallpaper => {
            ui.open_prompt();
            Effects::redraw()
        }
        InputCommand::MoveLeft if shade_open => {
            ui.cursor.left();
            Effects::redraw()
        }
        InputCommand::MoveRight if shade_open => {
            ui.cursor.right();
            Effects::redraw()
        }
        InputCommand::MoveUp if shade_open => {
            ui.cursor.up();
            Effects::redraw()
        }
        InputCommand::MoveDown if shade_open => {
            ui.cursor.down();
            Effects::redraw()
        }
        InputCommand::MoveUp if drawer_open => {
            ui.move_app_selection(-1);
            Effects::redraw()
        }
        InputCommand::MoveDown if drawer_open => {
            ui.move_app_selection(1);
            Effects::redraw()
        }
        InputCommand::Activate if shade_open => ui.activate_tile(ui.cursor.selected(), now),
        InputCommand::Activate if drawer_open => ui.launch_app(ui.selected_app, now),
        InputCommand::PromptChar(c) => {
            if let Some(prompt) = ui.prompt.as_mut() {
                prompt.buffer.push(c);
            }
            Effects::redraw()
        }
        InputCommand::PromptBackspace => {
            if let Some(prompt) = ui.prompt.as_mut() {
                prompt.buffer.pop();
            }
            Effects::redraw()
        }
        InputCommand::PromptSubmit => ui.submit_prompt(now),
        _ => Effects::default(),
    }
}

pub(crate) fn handle_key(ui: &mut UiState, key: KeyEvent, now: Instant) -> Effects {
    match map_key(key, ui.prompt.is_some()) {
        Some(command) => run_command(ui, command, now),
        None => Effects::default(),
    }
}

/// Left press starts a swipe; release either completes a gesture or counts
/// as a click on whatever is under the pointer.
pub(crate) fn handle_mouse(
    ui: &mut UiState,
    mouse: MouseEvent,
    layout: &ScreenLayout,
    now: Instant,
) -> Effects {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            ui.swipe.begin(mouse.row);
            Effects::default()
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(gesture) = ui.swipe.finish(mouse.row, swipe_zones(layout.area)) {
                log_debug(&format!("swipe gesture: {gesture:?}"));
                return ui.apply_gesture(gesture);
            }
            click(ui, hit_test(layout, mouse.column, mouse.row), now)
        }
        _ => Effects::default(),
    }
}

fn click(ui: &mut UiState, target: HitTarget, now: Instant) -> Effects {
    match target {
        HitTarget::TopHandle => ui.toggle_panel(Panel::Shade),
        HitTarget::Pill => ui.toggle_panel(Panel::Drawer),
        HitTarget::Tile(index) => match CONTROLS.get(index) {
            Some(&id) => ui.activate_tile(id, now),
            None => Effects::default(),
        },
        HitTarget::App(index) => ui.launch_app(index, now),
        HitTarget::Backdrop => ui.dismiss(),
        HitTarget::PanelBody | HitTarget::Home => Effects::default(),
    }
}
