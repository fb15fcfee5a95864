//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! trigger ──→ Intent ──→ Reducer ──→ State ──→ View
//!               ↑                                │
//!   subscription results          key presses ───┘
//! ```
//!
//! View-models own a state value and feed intents through a reducer; views
//! are pure functions of that state.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

/// Top-level branch shared by every data-backed screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Error,
    Ready,
}
