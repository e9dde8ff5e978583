/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Pointer move event in surface pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Pointer button event.
///
/// Coordinates are included so consumers do not depend on a separately
/// tracked "current pointer position".
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
}

/// Platform-agnostic input events.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),

    /// Pointer left the interactive surface.
    PointerLeft,

    /// Surface focus change.
    Focused(bool),
}

impl InputEvent {
    #[inline]
    pub fn moved(x: f32, y: f32) -> Self {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    #[inline]
    pub fn pressed(button: MouseButton, x: f32, y: f32) -> Self {
        InputEvent::PointerButton(PointerButtonEvent { button, state: MouseButtonState::Pressed, x, y })
    }

    #[inline]
    pub fn released(button: MouseButton, x: f32, y: f32) -> Self {
        InputEvent::PointerButton(PointerButtonEvent { button, state: MouseButtonState::Released, x, y })
    }
}
