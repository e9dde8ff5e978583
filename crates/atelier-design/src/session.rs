//! Editing session: owns the design state and routes input into it.

use atelier_engine::input::{InputEvent, InputState, MouseButton, MouseButtonState};
use atelier_engine::scene::Scene;
use atelier_engine::svg::SvgOptions;

use crate::error::DesignResult;
use crate::event::ControlEvent;
use crate::export::ExportRenderer;
use crate::preview;
use crate::state::DesignState;

/// Single-threaded owner of one [`DesignState`].
#[derive(Debug, Default)]
pub struct Session {
    state: DesignState,
    input: InputState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: DesignState) -> Self {
        Self { state, input: InputState::default() }
    }

    #[inline]
    pub fn state(&self) -> &DesignState {
        &self.state
    }

    /// Frozen copy of the current state.
    #[inline]
    pub fn snapshot(&self) -> DesignState {
        self.state.clone()
    }

    /// Applies a control event. Rejected events are logged and leave the state unchanged.
    pub fn apply(&mut self, event: &ControlEvent) -> DesignResult<()> {
        event.apply(&mut self.state).map_err(|e| {
            log::warn!("rejected {:?}: {}", event, e);
            e
        })
    }

    /// Applies events in order, stopping at the first rejection.
    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a ControlEvent>) -> DesignResult<()> {
        events.into_iter().try_for_each(|e| self.apply(e))
    }

    /// Feeds a pointer event from the preview surface.
    ///
    /// Primary press starts a drag, moves follow it, and release, leaving the
    /// surface or losing focus end it.
    pub fn handle_input(&mut self, event: &InputEvent) {
        let was_down = self.input.button_down(MouseButton::Left);
        self.input.apply_event(event);
        let down = self.input.button_down(MouseButton::Left);

        let rotation = &mut self.state.rotation;
        match *event {
            InputEvent::PointerButton(b)
                if b.button == MouseButton::Left && b.state == MouseButtonState::Pressed && !was_down =>
            {
                rotation.begin_drag(b.x);
            }
            InputEvent::PointerMoved(m) if down => rotation.update_drag(m.x),
            _ => {}
        }
        if !down {
            rotation.end_drag();
        }
    }

    pub fn preview_scene(&self) -> Scene {
        preview::build_scene(&self.state)
    }

    pub fn preview_svg(&self, opts: &SvgOptions) -> String {
        preview::render_svg(&self.state, opts)
    }

    /// Exports a snapshot of the current state as PNG bytes.
    pub fn export(&self, renderer: &ExportRenderer) -> DesignResult<Vec<u8>> {
        renderer.export_png(&self.snapshot())
    }
}
