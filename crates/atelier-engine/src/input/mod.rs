//! Pointer input.
//!
//! Public API is platform-agnostic: hosts translate their window-system or
//! browser events into [`InputEvent`]s and feed them to whatever owns the
//! interaction state.

mod state;
mod types;

pub use state::InputState;
pub use types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent};
