//! Solid/gradient color state and the user palette.

use std::fmt;
use std::str::FromStr;

use atelier_engine::paint::Color;

use crate::error::{DesignError, DesignResult};

pub const DEFAULT_BASE_COLOR: Color = Color::rgb(0x34, 0x98, 0xdb);

/// Color given to palette entries added without an explicit color.
pub const DEFAULT_PALETTE_COLOR: Color = Color::WHITE;

/// Fixed preset swatches.
pub const PRESETS: [Color; 8] = [
    Color::rgb(0x34, 0x98, 0xdb),
    Color::rgb(0xff, 0xff, 0xff),
    Color::rgb(0x00, 0x00, 0x00),
    Color::rgb(0xe7, 0x4c, 0x3c),
    Color::rgb(0x2e, 0xcc, 0x71),
    Color::rgb(0xf3, 0x9c, 0x12),
    Color::rgb(0x9b, 0x59, 0xb6),
    Color::rgb(0x34, 0x49, 0x5e),
];

pub const GRADIENT_SLOTS: usize = 4;

/// Parses a hex color, reporting failures against `field`.
pub fn parse_color(field: &'static str, s: &str) -> DesignResult<Color> {
    Color::from_hex(s).map_err(|e| DesignError::invalid(field, e.to_string()))
}

// ── GradientDirection ─────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum GradientDirection {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left corner to bottom-right corner.
    Diagonal,
}

impl GradientDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            GradientDirection::Horizontal => "horizontal",
            GradientDirection::Vertical => "vertical",
            GradientDirection::Diagonal => "diagonal",
        }
    }
}

impl FromStr for GradientDirection {
    type Err = DesignError;

    /// Accepts the direction names and their CSS spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "to right" => Ok(GradientDirection::Horizontal),
            "vertical" | "to bottom" => Ok(GradientDirection::Vertical),
            "diagonal" | "135deg" => Ok(GradientDirection::Diagonal),
            other => Err(DesignError::invalid("gradient direction", format!("unknown direction {:?}", other))),
        }
    }
}

impl fmt::Display for GradientDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ColorModel ────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GradientSlot {
    pub color: Color,
    pub enabled: bool,
}

/// Fill color state.
///
/// Invariants: the palette is never empty and `selected_palette_index` always
/// points into it; gradient slots 0 and 1 are always enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorModel {
    base_color: Color,
    palette: Vec<Color>,
    selected_palette_index: usize,
    gradient_enabled: bool,
    slots: [GradientSlot; GRADIENT_SLOTS],
    direction: GradientDirection,
}

impl Default for ColorModel {
    fn default() -> Self {
        let slot = |hex: u32, enabled: bool| GradientSlot {
            color: Color::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8),
            enabled,
        };
        Self {
            base_color: DEFAULT_BASE_COLOR,
            palette: vec![DEFAULT_BASE_COLOR],
            selected_palette_index: 0,
            gradient_enabled: false,
            slots: [
                slot(0x3498db, true),
                slot(0x2ecc71, true),
                slot(0xf39c12, false),
                slot(0x9b59b6, false),
            ],
            direction: GradientDirection::Horizontal,
        }
    }
}

impl ColorModel {
    pub fn new() -> Self {
        Self::default()
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn base_color(&self) -> Color {
        self.base_color
    }

    #[inline]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    #[inline]
    pub fn selected_palette_index(&self) -> usize {
        self.selected_palette_index
    }

    #[inline]
    pub fn gradient_enabled(&self) -> bool {
        self.gradient_enabled
    }

    #[inline]
    pub fn slots(&self) -> &[GradientSlot; GRADIENT_SLOTS] {
        &self.slots
    }

    #[inline]
    pub fn direction(&self) -> GradientDirection {
        self.direction
    }

    /// Index of the preset matching the base color, if any.
    pub fn active_preset(&self) -> Option<usize> {
        PRESETS.iter().position(|&p| p == self.base_color)
    }

    // ── solid colors ──────────────────────────────────────────────────────

    pub fn set_base_color(&mut self, color: Color) {
        self.base_color = color;
        self.gradient_enabled = false;
        log::debug!("base color -> {}", color);
    }

    pub fn select_preset(&mut self, idx: usize) -> DesignResult<()> {
        let color = *PRESETS
            .get(idx)
            .ok_or_else(|| DesignError::invalid("preset index", format!("{} out of range 0..{}", idx, PRESETS.len())))?;
        self.set_base_color(color);
        Ok(())
    }

    // ── palette ───────────────────────────────────────────────────────────

    fn check_palette_index(&self, idx: usize) -> DesignResult<()> {
        if idx < self.palette.len() {
            Ok(())
        } else {
            Err(DesignError::invalid(
                "palette index",
                format!("{} out of range 0..{}", idx, self.palette.len()),
            ))
        }
    }

    pub fn select_palette(&mut self, idx: usize) -> DesignResult<()> {
        self.check_palette_index(idx)?;
        self.selected_palette_index = idx;
        self.set_base_color(self.palette[idx]);
        Ok(())
    }

    /// Appends `color` (white when `None`), selects it and makes it the base color.
    pub fn add_palette_color(&mut self, color: Option<Color>) {
        let color = color.unwrap_or(DEFAULT_PALETTE_COLOR);
        self.palette.push(color);
        self.selected_palette_index = self.palette.len() - 1;
        self.set_base_color(color);
    }

    /// Removes palette entry `idx`.
    ///
    /// The last remaining entry is never removed; that case is a no-op.
    pub fn remove_palette_color(&mut self, idx: usize) -> DesignResult<()> {
        self.check_palette_index(idx)?;
        if self.palette.len() == 1 {
            log::debug!("refusing to remove the only palette entry");
            return Ok(());
        }

        self.palette.remove(idx);
        if idx == self.selected_palette_index {
            self.selected_palette_index = 0;
            self.base_color = self.palette[0];
        } else if idx < self.selected_palette_index {
            self.selected_palette_index -= 1;
        }
        log::debug!(
            "removed palette entry {} (len {}, selected {})",
            idx,
            self.palette.len(),
            self.selected_palette_index
        );
        Ok(())
    }

    /// Edits palette entry `idx` in place, selecting it as the base color.
    pub fn set_palette_color(&mut self, idx: usize, color: Color) -> DesignResult<()> {
        self.check_palette_index(idx)?;
        self.palette[idx] = color;
        self.selected_palette_index = idx;
        self.set_base_color(color);
        Ok(())
    }

    // ── gradient ──────────────────────────────────────────────────────────

    pub fn set_gradient_enabled(&mut self, enabled: bool) {
        self.gradient_enabled = enabled;
        log::debug!("gradient enabled -> {}", enabled);
    }

    fn check_slot(idx: usize) -> DesignResult<()> {
        if idx < GRADIENT_SLOTS {
            Ok(())
        } else {
            Err(DesignError::invalid("gradient slot", format!("{} out of range 0..{}", idx, GRADIENT_SLOTS)))
        }
    }

    pub fn set_gradient_slot(&mut self, idx: usize, color: Color) -> DesignResult<()> {
        Self::check_slot(idx)?;
        self.slots[idx].color = color;
        self.gradient_enabled = true;
        log::debug!("gradient slot {} -> {}", idx, color);
        Ok(())
    }

    /// Toggles slot 2 or 3. Slots 0 and 1 stay enabled; the call is ignored for them.
    pub fn set_gradient_slot_enabled(&mut self, idx: usize, enabled: bool) -> DesignResult<()> {
        Self::check_slot(idx)?;
        if idx < 2 {
            log::debug!("gradient slot {} is always enabled", idx);
            return Ok(());
        }
        self.slots[idx].enabled = enabled;
        Ok(())
    }

    pub fn set_gradient_direction(&mut self, direction: GradientDirection) {
        self.direction = direction;
        self.gradient_enabled = true;
        log::debug!("gradient direction -> {}", direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::rgb(0xe7, 0x4c, 0x3c)
    }

    #[test]
    fn defaults_match_designer() {
        let m = ColorModel::new();
        assert_eq!(m.base_color(), DEFAULT_BASE_COLOR);
        assert_eq!(m.palette(), &[DEFAULT_BASE_COLOR]);
        assert_eq!(m.selected_palette_index(), 0);
        assert!(!m.gradient_enabled());
        let enabled: Vec<bool> = m.slots().iter().map(|s| s.enabled).collect();
        assert_eq!(enabled, vec![true, true, false, false]);
        assert_eq!(m.active_preset(), Some(0));
    }

    #[test]
    fn base_color_disables_gradient() {
        let mut m = ColorModel::new();
        m.set_gradient_enabled(true);
        m.set_base_color(red());
        assert!(!m.gradient_enabled());
        assert_eq!(m.active_preset(), Some(3));
    }

    #[test]
    fn select_preset_rejects_unknown_index() {
        let mut m = ColorModel::new();
        assert!(matches!(m.select_preset(8), Err(DesignError::InvalidInput { .. })));
        assert_eq!(m, ColorModel::new());
        m.select_preset(2).unwrap();
        assert_eq!(m.base_color(), Color::BLACK);
    }

    #[test]
    fn add_palette_color_selects_new_entry() {
        let mut m = ColorModel::new();
        m.add_palette_color(None);
        assert_eq!(m.palette().len(), 2);
        assert_eq!(m.selected_palette_index(), 1);
        assert_eq!(m.base_color(), Color::WHITE);
    }

    #[test]
    fn removing_only_entry_is_noop() {
        let mut m = ColorModel::new();
        m.remove_palette_color(0).unwrap();
        assert_eq!(m.palette(), &[DEFAULT_BASE_COLOR]);
        assert_eq!(m.selected_palette_index(), 0);
    }

    #[test]
    fn removing_selected_entry_resets_to_first() {
        let mut m = ColorModel::new();
        m.add_palette_color(Some(red()));
        m.remove_palette_color(1).unwrap();
        assert_eq!(m.selected_palette_index(), 0);
        assert_eq!(m.base_color(), DEFAULT_BASE_COLOR);

        m.add_palette_color(Some(red()));
        m.select_palette(1).unwrap();
        m.remove_palette_color(1).unwrap();
        // Entry 0 becomes the base even when the first entry itself was selected before.
        m.add_palette_color(Some(Color::BLACK));
        m.select_palette(0).unwrap();
        m.remove_palette_color(0).unwrap();
        assert_eq!(m.palette(), &[Color::BLACK]);
        assert_eq!(m.base_color(), Color::BLACK);
    }

    #[test]
    fn removing_below_selection_keeps_selected_color() {
        let mut m = ColorModel::new();
        m.add_palette_color(Some(red()));
        m.add_palette_color(Some(Color::BLACK));
        assert_eq!(m.selected_palette_index(), 2);
        m.remove_palette_color(0).unwrap();
        assert_eq!(m.selected_palette_index(), 1);
        assert_eq!(m.palette()[m.selected_palette_index()], Color::BLACK);
    }

    #[test]
    fn removing_above_selection_keeps_index() {
        let mut m = ColorModel::new();
        m.add_palette_color(Some(red()));
        m.select_palette(0).unwrap();
        m.remove_palette_color(1).unwrap();
        assert_eq!(m.selected_palette_index(), 0);
    }

    #[test]
    fn palette_index_out_of_range_is_rejected() {
        let mut m = ColorModel::new();
        assert!(m.remove_palette_color(1).is_err());
        assert!(m.select_palette(1).is_err());
        assert!(m.set_palette_color(1, red()).is_err());
    }

    #[test]
    fn set_palette_color_edits_in_place() {
        let mut m = ColorModel::new();
        m.add_palette_color(None);
        m.set_palette_color(0, red()).unwrap();
        assert_eq!(m.palette(), &[red(), Color::WHITE]);
        assert_eq!(m.selected_palette_index(), 0);
        assert_eq!(m.base_color(), red());
    }

    #[test]
    fn gradient_edits_enable_gradient() {
        let mut m = ColorModel::new();
        m.set_gradient_slot(2, red()).unwrap();
        assert!(m.gradient_enabled());
        assert_eq!(m.slots()[2].color, red());

        m.set_gradient_enabled(false);
        m.set_gradient_direction(GradientDirection::Vertical);
        assert!(m.gradient_enabled());
        assert!(m.set_gradient_slot(4, red()).is_err());
    }

    #[test]
    fn first_two_slots_stay_enabled() {
        let mut m = ColorModel::new();
        m.set_gradient_slot_enabled(1, false).unwrap();
        assert!(m.slots()[1].enabled);
        m.set_gradient_slot_enabled(3, true).unwrap();
        assert!(m.slots()[3].enabled);
        assert!(m.set_gradient_slot_enabled(4, true).is_err());
    }

    #[test]
    fn direction_spellings() {
        assert_eq!("to right".parse::<GradientDirection>().unwrap(), GradientDirection::Horizontal);
        assert_eq!("Vertical".parse::<GradientDirection>().unwrap(), GradientDirection::Vertical);
        assert_eq!("135deg".parse::<GradientDirection>().unwrap(), GradientDirection::Diagonal);
        assert!("radial".parse::<GradientDirection>().is_err());
    }

    #[test]
    fn malformed_color_is_invalid_input() {
        let err = parse_color("base color", "#zzz").unwrap_err();
        assert!(matches!(err, DesignError::InvalidInput { field: "base color", .. }));
    }
}
