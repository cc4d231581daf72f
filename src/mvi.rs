//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Keystrokes and fetch completions both arrive as intents. The reducer is
//! the only place state changes, and the view only ever reads state.

/// Marker trait for state objects.
///
/// States are cloned to produce new states and compared to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents (user actions or system events).
pub trait Intent: Send + 'static {}

/// Transforms state based on intents.
///
/// Must be a pure function: (State, Intent) -> State.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
