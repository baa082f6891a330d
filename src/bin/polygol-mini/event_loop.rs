//! Poll-based UI loop: one thread, two tickers, weather results over a channel.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::event::{self, Event};
use polygol_mini::schedule::Ticker;
use polygol_mini::terminal_restore::TerminalRestoreGuard;
use polygol_mini::{log_debug, WeatherWorker};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::event_state::{Effects, UiState};
use crate::input::{handle_key, handle_mouse};
use crate::layout::compute_layout;
use crate::ui::draw;

/// Longest the loop blocks on input before re-checking timers.
const MAX_POLL: Duration = Duration::from_millis(250);

pub(crate) struct LoopTimers {
    pub(crate) clock: Ticker,
    pub(crate) weather: Ticker,
}

impl LoopTimers {
    pub(crate) fn new(clock_interval: Duration, weather_interval: Duration, now: Instant) -> Self {
        Self {
            clock: Ticker::new(clock_interval, now),
            weather: Ticker::immediate(weather_interval, now),
        }
    }

    fn next_wait(&self, ui: &UiState, now: Instant) -> Duration {
        let mut wait = MAX_POLL
            .min(self.clock.time_until(now))
            .min(self.weather.time_until(now));
        if let Some(deadline) = ui.status_deadline() {
            wait = wait.min(deadline.saturating_duration_since(now));
        }
        wait
    }
}

/// Timer and worker bookkeeping for one pass of the loop.
pub(crate) fn tick(
    ui: &mut UiState,
    timers: &mut LoopTimers,
    worker: &mut WeatherWorker,
    now: Instant,
) -> Effects {
    let mut effects = Effects::default();

    while let Some(message) = worker.poll() {
        ui.weather.apply(message);
        effects.redraw = true;
    }

    if timers.clock.poll(now) {
        ui.frame = ui.frame.wrapping_add(1);
        effects.redraw = true;
    }

    // The schedule keeps running while weather is hidden; only the fetch is skipped.
    if timers.weather.poll(now) && ui.controller.prefs().show_weather {
        effects.fetch_weather = true;
    }

    if ui.expire_status(now) {
        effects.redraw = true;
    }
    effects
}

fn start_fetch(worker: &mut WeatherWorker) {
    log_debug(&format!(
        "weather fetch requested ({}, {} already in flight)",
        worker.source_label(),
        worker.in_flight()
    ));
    worker.request();
}

/// Take over the terminal, run until quit, and hand it back.
pub(crate) fn run_app(
    ui: &mut UiState,
    timers: &mut LoopTimers,
    worker: &mut WeatherWorker,
) -> Result<()> {
    let mut stdout = io::stdout();
    let guard = TerminalRestoreGuard::enter(&mut stdout).context("failed to prepare terminal")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("failed to start terminal UI")?;

    let result = app_loop(&mut terminal, ui, timers, worker);

    drop(terminal);
    guard.restore();
    result
}

fn app_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ui: &mut UiState,
    timers: &mut LoopTimers,
    worker: &mut WeatherWorker,
) -> Result<()> {
    terminal.draw(|frame| draw(frame, ui, Local::now().naive_local()))?;

    loop {
        let now = Instant::now();
        let mut effects = tick(ui, timers, worker, now);

        if event::poll(timers.next_wait(ui, now))? {
            let now = Instant::now();
            let event_effects = match event::read()? {
                Event::Key(key) => handle_key(ui, key, now),
                Event::Mouse(mouse) => {
                    let layout = compute_layout(terminal.size()?, &ui.shell);
                    handle_mouse(ui, mouse, &layout, now)
                }
                Event::Resize(_, _) => Effects::redraw(),
                _ => Effects::default(),
            };
            effects = effects.merge(event_effects);
        }

        if effects.fetch_weather {
            start_fetch(worker);
        }
        if effects.quit {
            log_debug("quit requested");
            break;
        }
        if effects.redraw {
            terminal.draw(|frame| draw(frame, ui, Local::now().naive_local()))?;
        }
    }
    Ok(())
}
