use std::collections::HashSet;

use super::types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent};

/// Current pointer state for a single interactive surface.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    /// Whether the surface is focused.
    pub focused: bool,

    /// Pointer position in surface pixels; `None` while outside the surface.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an input event and reports whether it changed the held-button set.
    pub fn apply_event(&mut self, ev: &InputEvent) -> bool {
        match *ev {
            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // On focus loss, clear held buttons so no press outlives the surface.
                    let had_any = !self.buttons_down.is_empty();
                    self.buttons_down.clear();
                    return had_any;
                }
                false
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((x, y));
                false
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
                let had_any = !self.buttons_down.is_empty();
                self.buttons_down.clear();
                had_any
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((x, y));
                match state {
                    MouseButtonState::Pressed => self.buttons_down.insert(button),
                    MouseButtonState::Released => self.buttons_down.remove(&button),
                }
            }
        }
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_track_button() {
        let mut state = InputState::default();
        assert!(state.apply_event(&InputEvent::pressed(MouseButton::Left, 3.0, 4.0)));
        assert!(state.button_down(MouseButton::Left));
        assert_eq!(state.pointer_pos, Some((3.0, 4.0)));
        assert!(state.apply_event(&InputEvent::released(MouseButton::Left, 5.0, 4.0)));
        assert!(!state.button_down(MouseButton::Left));
    }

    #[test]
    fn pointer_leave_releases_buttons() {
        let mut state = InputState::default();
        state.apply_event(&InputEvent::pressed(MouseButton::Left, 0.0, 0.0));
        assert!(state.apply_event(&InputEvent::PointerLeft));
        assert!(state.buttons_down.is_empty());
        assert_eq!(state.pointer_pos, None);
    }

    #[test]
    fn focus_loss_releases_buttons() {
        let mut state = InputState::default();
        state.apply_event(&InputEvent::Focused(true));
        state.apply_event(&InputEvent::pressed(MouseButton::Right, 0.0, 0.0));
        assert!(state.apply_event(&InputEvent::Focused(false)));
        assert!(!state.button_down(MouseButton::Right));
    }

    #[test]
    fn repeated_release_reports_no_change() {
        let mut state = InputState::default();
        assert!(!state.apply_event(&InputEvent::released(MouseButton::Left, 0.0, 0.0)));
    }
}
