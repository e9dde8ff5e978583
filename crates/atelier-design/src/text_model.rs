//! Front/back text strings and their placement.

use atelier_engine::paint::Color;

use crate::error::{DesignError, DesignResult};
use crate::rotation::Face;

/// Longest accepted text, in Unicode scalar values.
pub const MAX_TEXT_CHARS: usize = 20;

pub const DEFAULT_TEXT_COLOR: Color = Color::WHITE;
/// Default size in design pixels (relative to the 400-wide frame).
pub const DEFAULT_TEXT_SIZE: f32 = 24.0;
/// Upper bound for the text size: the height of the design frame.
pub const MAX_TEXT_SIZE: f32 = 500.0;

pub const DEFAULT_HORIZONTAL: f32 = 50.0;
pub const DEFAULT_VERTICAL: f32 = 40.0;

/// Range the vertical position control is bounded to. The model itself accepts `[0, 100]`.
pub const VERTICAL_CONTROL_RANGE: (f32, f32) = (20.0, 70.0);

#[derive(Debug, Clone, PartialEq)]
pub struct TextModel {
    front_text: String,
    back_text: String,
    color: Color,
    size: f32,
    horizontal: f32,
    vertical: f32,
}

impl Default for TextModel {
    fn default() -> Self {
        Self {
            front_text: String::new(),
            back_text: String::new(),
            color: DEFAULT_TEXT_COLOR,
            size: DEFAULT_TEXT_SIZE,
            horizontal: DEFAULT_HORIZONTAL,
            vertical: DEFAULT_VERTICAL,
        }
    }
}

fn check_percent(field: &'static str, value: f32) -> DesignResult<f32> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(DesignError::invalid(field, format!("{} is outside 0..=100", value)))
    }
}

impl TextModel {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn front_text(&self) -> &str {
        &self.front_text
    }

    #[inline]
    pub fn back_text(&self) -> &str {
        &self.back_text
    }

    #[inline]
    pub fn text_for(&self, face: Face) -> &str {
        match face {
            Face::Front => &self.front_text,
            Face::Back => &self.back_text,
        }
    }

    /// Text to draw on `face`, or `None` when it is blank.
    pub fn visible_text(&self, face: Face) -> Option<&str> {
        let text = self.text_for(face);
        (!text.trim().is_empty()).then_some(text)
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// `(horizontal, vertical)` in percent of the frame.
    #[inline]
    pub fn position(&self) -> (f32, f32) {
        (self.horizontal, self.vertical)
    }

    pub fn set_text(&mut self, face: Face, text: &str) -> DesignResult<()> {
        let chars = text.chars().count();
        if chars > MAX_TEXT_CHARS {
            return Err(DesignError::invalid(
                "text",
                format!("{} characters exceeds the limit of {}", chars, MAX_TEXT_CHARS),
            ));
        }
        let slot = match face {
            Face::Front => &mut self.front_text,
            Face::Back => &mut self.back_text,
        };
        *slot = text.to_string();
        log::debug!("{} text -> {:?}", face, text);
        Ok(())
    }

    /// Clears both faces.
    pub fn clear_text(&mut self) {
        self.front_text.clear();
        self.back_text.clear();
        log::debug!("text cleared");
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_size(&mut self, size: f32) -> DesignResult<()> {
        if !size.is_finite() || size <= 0.0 || size > MAX_TEXT_SIZE {
            return Err(DesignError::invalid(
                "text size",
                format!("{} is outside (0, {}]", size, MAX_TEXT_SIZE),
            ));
        }
        self.size = size;
        Ok(())
    }

    /// Sets the anchor position, both axes in percent `[0, 100]`.
    pub fn set_position(&mut self, horizontal: f32, vertical: f32) -> DesignResult<()> {
        let horizontal = check_percent("text horizontal position", horizontal)?;
        let vertical = check_percent("text vertical position", vertical)?;
        self.horizontal = horizontal;
        self.vertical = vertical;
        Ok(())
    }
}
