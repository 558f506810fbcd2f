//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the current
//! phase, and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (Processing phase): draws every ~80ms for smooth
//!   status-line animation.
//! - **Idle/Purged**: sleeps up to 500ms, only redraws on events or
//!   terminal resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor
//! because `set_cursor_position` resets the terminal's blink timer on
//! every `draw()` call, making blinking cursors appear erratic during
//! continuous redraws.
//!
//! ## Background Tasks
//!
//! The generation request and the reveal timer both run as tokio tasks
//! that report back through an `mpsc` channel as `Action`s. Their
//! `AbortHandle`s are retained so teardown can never leave a timer firing
//! into a restored terminal.

mod component;
mod components;
mod event;
mod ui;

use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::execute;
use log::{debug, info, warn};
use ratatui::style::Color;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Phase};
use crate::core::theme;
use crate::generation::{GeminiProvider, GenerationProvider, build_prompt, parse_diagnostic};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
}

impl TuiState {
    pub fn new(accent: Color) -> Self {
        Self {
            input_box: InputBox::new(accent),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Show, SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape, Hide);
    }
}

/// Build the Gemini provider from a resolved config.
pub fn build_provider(config: &ResolvedConfig) -> Arc<dyn GenerationProvider> {
    let api_key = config
        .gemini_api_key
        .clone()
        .expect("Gemini API key must be set (config file, GEMINI_API_KEY env var, or .env)");
    Arc::new(GeminiProvider::new(
        api_key,
        config.model_name.clone(),
        Some(config.gemini_base_url.clone()),
    ))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let provider = build_provider(&config);
    let mut app = App::from_config(provider, &config);
    let mut tui = TuiState::new(theme::accent_color(&app.theme_color));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Abort handles for in-flight request/timer tasks
    let mut pending_tasks: Vec<tokio::task::AbortHandle> = Vec::new();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync InputBox props with App state
        tui.input_box.accent = theme::accent_color(&app.theme_color);

        let animating = app.phase == Phase::Processing;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let frame_index = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, frame_index))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of phase
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            match app.phase {
                Phase::Idle => {
                    if matches!(event, TuiEvent::Escape) {
                        if update(&mut app, Action::Quit) == Effect::Quit {
                            should_quit = true;
                        }
                        continue;
                    }
                    if let Some(InputEvent::Submit(text)) = tui.input_box.handle_event(&event) {
                        let effect = update(&mut app, Action::Submit(text));
                        if let Effect::SpawnRequest { worry } = effect {
                            pending_tasks.push(spawn_request(&app, &worry, tx.clone()));
                        }
                    }
                }
                Phase::Processing => {
                    // The worry field is inert and there is no cancel path.
                }
                Phase::Purged => match event {
                    TuiEvent::Submit | TuiEvent::InputChar('r') | TuiEvent::InputChar('R') => {
                        update(&mut app, Action::Reboot);
                    }
                    TuiEvent::Escape => {
                        if update(&mut app, Action::Quit) == Effect::Quit {
                            should_quit = true;
                        }
                    }
                    _ => {}
                },
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (request settle, reveal timer)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => {
                    should_quit = true;
                }
                Effect::SpawnRequest { worry } => {
                    pending_tasks.push(spawn_request(&app, &worry, tx.clone()));
                }
                Effect::ScheduleReveal => {
                    pending_tasks.push(spawn_reveal(app.reveal_delay, tx.clone()));
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }
    }

    // Teardown guard: no pending timer or request outlives the terminal
    for handle in pending_tasks.drain(..) {
        handle.abort();
    }

    ratatui::restore();
    Ok(())
}

/// Spawns the single generation request for a submitted worry. Every
/// outcome, including parse failure of a 200 reply, reports back as one
/// `Action::Settled`.
fn spawn_request(app: &App, worry: &str, tx: mpsc::Sender<Action>) -> tokio::task::AbortHandle {
    info!("Spawning generation request");

    let provider = app.provider.clone();
    let prompt = build_prompt(worry);

    let handle = tokio::spawn(async move {
        let outcome = match provider.generate(&prompt).await {
            Ok(text) => parse_diagnostic(&text),
            Err(e) => Err(e),
        };
        if tx.send(Action::Settled(outcome)).is_err() {
            warn!("Failed to send settle action: receiver dropped");
        }
    });
    handle.abort_handle()
}

/// Spawns the fixed presentation delay between settle and the Purged
/// screen.
fn spawn_reveal(delay: Duration, tx: mpsc::Sender<Action>) -> tokio::task::AbortHandle {
    debug!("Scheduling reveal in {:?}", delay);

    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if tx.send(Action::RevealElapsed).is_err() {
            warn!("Failed to send reveal action: receiver dropped");
        }
    });
    handle.abort_handle()
}
