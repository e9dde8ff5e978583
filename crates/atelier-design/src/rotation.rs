//! Discrete 360° view angle, pointer-drag rotation and the derived face.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DesignError, DesignResult};

/// Number of discrete view angles.
pub const STEP_COUNT: usize = 12;
/// Degrees per rotation step.
pub const STEP_DEGREES: f32 = 30.0;
/// Horizontal pointer travel that maps to one rotation step.
pub const PIXELS_PER_STEP: f32 = 20.0;

/// Side of the garment presented to the viewer.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    #[default]
    Front,
    Back,
}

impl Face {
    /// Face shown at rotation `index`: the first half turn is the front.
    #[inline]
    pub fn for_index(index: usize) -> Face {
        if index % STEP_COUNT < STEP_COUNT / 2 { Face::Front } else { Face::Back }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Face::Front => "front",
            Face::Back => "back",
        })
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { start_x: f32, start_index: usize },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RotationModel {
    index: usize,
    face: Face,
    drag: DragState,
}

impl RotationModel {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn angle_degrees(&self) -> f32 {
        self.index as f32 * STEP_DEGREES
    }

    #[inline]
    pub fn face(&self) -> Face {
        self.face
    }

    #[inline]
    pub fn is_front(&self) -> bool {
        self.face == Face::Front
    }

    #[inline]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    fn set_index(&mut self, index: usize) {
        self.index = index % STEP_COUNT;
        self.face = Face::for_index(self.index);
        log::debug!("rotation -> {}° ({})", self.angle_degrees(), self.face);
    }

    /// Rotates by `delta` steps, wrapping in both directions.
    pub fn step(&mut self, delta: i32) {
        let next = (self.index as i64 + delta as i64).rem_euclid(STEP_COUNT as i64);
        self.set_index(next as usize);
    }

    pub fn rotate_to(&mut self, index: usize) -> DesignResult<()> {
        if index >= STEP_COUNT {
            return Err(DesignError::invalid(
                "rotation index",
                format!("{} out of range 0..{}", index, STEP_COUNT),
            ));
        }
        self.set_index(index);
        Ok(())
    }

    /// Presents `face` without changing the angle. The next rotation change
    /// derives the face from the angle again.
    pub fn show_face(&mut self, face: Face) {
        self.face = face;
    }

    // ── drag ──────────────────────────────────────────────────────────────

    pub fn begin_drag(&mut self, x: f32) {
        self.drag = DragState::Dragging { start_x: x, start_index: self.index };
    }

    /// Follows the pointer while dragging; ignored when idle.
    pub fn update_drag(&mut self, x: f32) {
        let DragState::Dragging { start_x, start_index } = self.drag else { return };
        let steps = ((x - start_x) / PIXELS_PER_STEP).round();
        if !steps.is_finite() {
            return;
        }
        let steps = (steps as i64).rem_euclid(STEP_COUNT as i64) as usize;
        let next = (start_index + steps) % STEP_COUNT;
        if next != self.index {
            self.set_index(next);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }
}
