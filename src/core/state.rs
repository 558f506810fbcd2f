//! # Application State
//!
//! Core business state for purgecache. This module contains domain logic
//! only - no TUI-specific types. Presentation state lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn GenerationProvider>  // text-generation backend
//! ├── phase: Phase                  // Idle | Processing | Purged
//! ├── worry: String                 // submitted worry, cleared on purge
//! ├── result: Option<Diagnostic>    // model reply or fallback
//! ├── theme_color: String           // hex accent, default green
//! ├── model_name: String            // for the title bar
//! └── reveal_delay: Duration        // post-settle presentation delay
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;
use std::time::Duration;

use crate::core::config::ResolvedConfig;
use crate::core::theme::DEFAULT_THEME;
use crate::generation::{Diagnostic, GenerationProvider};

/// The three screens of the purge cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting worry input.
    Idle,
    /// Request in flight (or settled, waiting out the reveal delay).
    /// Input is inert; there is no cancel path.
    Processing,
    /// Showing the diagnostic. Reboot is the only way out.
    Purged,
}

pub struct App {
    pub provider: Arc<dyn GenerationProvider>,
    pub phase: Phase,
    /// The submitted worry. Held during Processing for the request, cleared
    /// exactly when entering Purged.
    pub worry: String,
    /// Non-None from settle onwards, cleared on reboot.
    pub result: Option<Diagnostic>,
    /// Hex accent color. Only ever set through strict validation.
    pub theme_color: String,
    pub model_name: String,
    pub reveal_delay: Duration,
}

impl App {
    pub fn new(provider: Arc<dyn GenerationProvider>, model_name: String) -> Self {
        Self {
            provider,
            phase: Phase::Idle,
            worry: String::new(),
            result: None,
            theme_color: DEFAULT_THEME.to_string(),
            model_name,
            reveal_delay: Duration::from_millis(1500),
        }
    }

    pub fn from_config(provider: Arc<dyn GenerationProvider>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(provider, config.model_name.clone());
        app.reveal_delay = Duration::from_millis(config.reveal_delay_ms);
        app
    }
}
