//! Control events: the serializable input surface of a design session.

use serde::{Deserialize, Serialize};

use crate::color_model::{parse_color, GradientDirection};
use crate::error::DesignResult;
use crate::rotation::Face;
use crate::state::DesignState;
use crate::text_model::VERTICAL_CONTROL_RANGE;

/// One user action on the designer controls.
///
/// Colors are hex strings and directions are names, exactly as a form or a
/// design file supplies them; they are validated when applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ControlEvent {
    SetBaseColor { color: String },
    SelectPreset { index: usize },
    SelectPalette { index: usize },
    AddPaletteColor {
        #[serde(default)]
        color: Option<String>,
    },
    RemovePaletteColor { index: usize },
    SetPaletteColor { index: usize, color: String },
    SetGradientEnabled { enabled: bool },
    SetGradientSlot { index: usize, color: String },
    SetGradientSlotEnabled { index: usize, enabled: bool },
    SetGradientDirection { direction: String },
    SetFrontText { text: String },
    SetBackText { text: String },
    ClearText,
    SetTextColor { color: String },
    SetTextSize { size: f32 },
    /// Percentages; the vertical value is clamped to the control's range.
    SetTextPosition { horizontal: f32, vertical: f32 },
    Step { delta: i32 },
    RotateTo { index: usize },
    /// A complete pointer drag from `from` to `to` (horizontal pixels).
    Drag { from: f32, to: f32 },
    ShowFace { face: Face },
}

impl ControlEvent {
    /// Applies the event. On error the state is unchanged.
    pub fn apply(&self, state: &mut DesignState) -> DesignResult<()> {
        match self {
            ControlEvent::SetBaseColor { color } => {
                state.color.set_base_color(parse_color("base color", color)?);
            }
            ControlEvent::SelectPreset { index } => state.color.select_preset(*index)?,
            ControlEvent::SelectPalette { index } => state.color.select_palette(*index)?,
            ControlEvent::AddPaletteColor { color } => {
                let color = color.as_deref().map(|c| parse_color("palette color", c)).transpose()?;
                state.color.add_palette_color(color);
            }
            ControlEvent::RemovePaletteColor { index } => state.color.remove_palette_color(*index)?,
            ControlEvent::SetPaletteColor { index, color } => {
                let color = parse_color("palette color", color)?;
                state.color.set_palette_color(*index, color)?;
            }
            ControlEvent::SetGradientEnabled { enabled } => state.color.set_gradient_enabled(*enabled),
            ControlEvent::SetGradientSlot { index, color } => {
                let color = parse_color("gradient color", color)?;
                state.color.set_gradient_slot(*index, color)?;
            }
            ControlEvent::SetGradientSlotEnabled { index, enabled } => {
                state.color.set_gradient_slot_enabled(*index, *enabled)?;
            }
            ControlEvent::SetGradientDirection { direction } => {
                let direction: GradientDirection = direction.parse()?;
                state.color.set_gradient_direction(direction);
            }
            ControlEvent::SetFrontText { text } => state.text.set_text(Face::Front, text)?,
            ControlEvent::SetBackText { text } => state.text.set_text(Face::Back, text)?,
            ControlEvent::ClearText => state.text.clear_text(),
            ControlEvent::SetTextColor { color } => {
                state.text.set_color(parse_color("text color", color)?);
            }
            ControlEvent::SetTextSize { size } => state.text.set_size(*size)?,
            ControlEvent::SetTextPosition { horizontal, vertical } => {
                let (lo, hi) = VERTICAL_CONTROL_RANGE;
                state.text.set_position(*horizontal, vertical.clamp(lo, hi))?;
            }
            ControlEvent::Step { delta } => state.rotation.step(*delta),
            ControlEvent::RotateTo { index } => state.rotation.rotate_to(*index)?,
            ControlEvent::Drag { from, to } => {
                state.rotation.begin_drag(*from);
                state.rotation.update_drag(*to);
                state.rotation.end_drag();
            }
            ControlEvent::ShowFace { face } => state.rotation.show_face(*face),
        }
        Ok(())
    }
}
