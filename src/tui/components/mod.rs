//! # TUI Components
//!
//! One component per screen of the purge cycle, plus the shared input
//! field:
//!
//! - `InputBox`: stateful worry entry field (Idle)
//! - `ProcessingScreen`: animated status lines (Processing)
//! - `ResultScreen`: diagnostic summary and reboot hint (Purged)
//!
//! Components receive external data as props (struct fields synced before
//! each draw), never by reaching into global state. Stateful components
//! additionally emit high-level events through `EventHandler`.

pub mod input_box;
pub mod processing;
pub mod result_screen;

pub use input_box::{InputBox, InputEvent};
pub use processing::ProcessingScreen;
pub use result_screen::ResultScreen;
