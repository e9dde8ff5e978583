//! Design files: TOML documents holding logging/export settings and the
//! control events that build a design.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use atelier_design::event::ControlEvent;
use atelier_design::export::{ExportConfig, DEFAULT_EXPORT_HEIGHT, DEFAULT_EXPORT_WIDTH};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DesignFile {
    #[serde(default)]
    pub logging: LoggingSection,
    #[serde(default)]
    pub export: ExportSection,
    #[serde(default)]
    pub events: Vec<ControlEvent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSection {
    /// `env_logger` filter, e.g. `"info"` or `"atelier_design=debug"`.
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportSection {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Font file for text, relative to the design file.
    pub font: Option<PathBuf>,
}

fn default_width() -> u32 {
    DEFAULT_EXPORT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_EXPORT_HEIGHT
}

impl Default for ExportSection {
    fn default() -> Self {
        Self { width: DEFAULT_EXPORT_WIDTH, height: DEFAULT_EXPORT_HEIGHT, font: None }
    }
}

impl DesignFile {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid design file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading design file {}", path.display()))?;
        let mut file = Self::parse(&text).with_context(|| format!("parsing {}", path.display()))?;
        if let (Some(font), Some(dir)) = (file.export.font.as_ref(), path.parent()) {
            if font.is_relative() {
                file.export.font = Some(dir.join(font));
            }
        }
        Ok(file)
    }

    /// Export settings, with command-line overrides applied.
    pub fn export_config(&self, width: Option<u32>, height: Option<u32>) -> ExportConfig {
        ExportConfig {
            width: width.unwrap_or(self.export.width),
            height: height.unwrap_or(self.export.height),
            font_path: self.export.font.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_design::rotation::Face;

    const SAMPLE: &str = r##"
[logging]
filter = "atelier_design=debug"

[export]
width = 400

[[events]]
op = "set_base_color"
color = "#e74c3c"

[[events]]
op = "set_front_text"
text = "HELLO"

[[events]]
op = "drag"
from = 0.0
to = 60.0

[[events]]
op = "show_face"
face = "back"

[[events]]
op = "clear_text"
"##;

    #[test]
    fn parses_sections_and_events() {
        let file = DesignFile::parse(SAMPLE).unwrap();
        assert_eq!(file.logging.filter.as_deref(), Some("atelier_design=debug"));
        assert_eq!((file.export.width, file.export.height), (400, 1000));
        assert_eq!(file.events.len(), 5);
        assert_eq!(file.events[0], ControlEvent::SetBaseColor { color: "#e74c3c".to_string() });
        assert_eq!(file.events[2], ControlEvent::Drag { from: 0.0, to: 60.0 });
        assert_eq!(file.events[3], ControlEvent::ShowFace { face: Face::Back });
        assert_eq!(file.events[4], ControlEvent::ClearText);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = DesignFile::parse("").unwrap();
        assert!(file.events.is_empty());
        assert_eq!(file.export_config(None, None), ExportConfig::default());
    }

    #[test]
    fn cli_overrides_size() {
        let file = DesignFile::parse("[export]\nwidth = 400\nheight = 500\n").unwrap();
        let cfg = file.export_config(Some(1600), None);
        assert_eq!((cfg.width, cfg.height), (1600, 500));
    }

    #[test]
    fn unknown_op_is_an_error() {
        assert!(DesignFile::parse("[[events]]\nop = \"explode\"\n").is_err());
    }

    #[test]
    fn bundled_sample_parses() {
        let file = DesignFile::parse(include_str!("../designs/sample.toml")).unwrap();
        assert!(!file.events.is_empty());
    }
}
