//! # Actions
//!
//! Everything that can happen in purgecache becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The request settles? That's `Action::Settled(outcome)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the side effect the caller
//! should run. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes the whole purge cycle testable without a terminal or a
//! network: drive the reducer with actions, assert on state and effects.

use log::warn;

use crate::core::state::{App, Phase};
use crate::core::theme::{self, DEFAULT_THEME};
use crate::generation::{Diagnostic, ProviderError};

#[derive(Debug)]
pub enum Action {
    /// Submit the worry text from the input field.
    Submit(String),
    /// The generation request settled, successfully or not.
    Settled(Result<Diagnostic, ProviderError>),
    /// The post-settle presentation delay elapsed.
    RevealElapsed,
    /// Reset from the Purged screen back to Idle.
    Reboot,
    Quit,
}

/// Side effects the caller must run after `update` returns.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Issue one generation request for this worry.
    SpawnRequest { worry: String },
    /// Start the reveal timer (App::reveal_delay).
    ScheduleReveal,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            if app.phase != Phase::Idle {
                return Effect::None;
            }
            let worry = text.trim().to_string();
            // Empty submission is a no-op, not an error state.
            if worry.is_empty() {
                return Effect::None;
            }
            app.worry = worry.clone();
            app.phase = Phase::Processing;
            Effect::SpawnRequest { worry }
        }
        Action::Settled(outcome) => {
            if app.phase != Phase::Processing {
                warn!("Settled action outside Processing phase, ignoring");
                return Effect::None;
            }
            let diagnostic = match outcome {
                Ok(d) => d,
                Err(e) => {
                    // Every failure collapses into the fixed fallback so the
                    // flow always reaches Purged.
                    warn!("Generation failed, substituting fallback: {e}");
                    Diagnostic::fallback()
                }
            };
            if theme::is_valid_hex(&diagnostic.color) {
                app.theme_color = diagnostic.color.clone();
            }
            app.result = Some(diagnostic);
            Effect::ScheduleReveal
        }
        Action::RevealElapsed => {
            // Only meaningful while Processing with a settled result.
            if app.phase != Phase::Processing || app.result.is_none() {
                return Effect::None;
            }
            app.phase = Phase::Purged;
            app.worry.clear();
            Effect::None
        }
        Action::Reboot => {
            if app.phase != Phase::Purged {
                return Effect::None;
            }
            app.phase = Phase::Idle;
            app.result = None;
            app.worry.clear();
            app.theme_color = DEFAULT_THEME.to_string();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
