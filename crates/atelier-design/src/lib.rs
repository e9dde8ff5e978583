//! Atelier design: garment configuration state and its two renderers.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use atelier_design::prelude::*;
//!
//! let mut session = Session::new();
//! session.apply(&ControlEvent::SetBaseColor { color: "#e74c3c".into() })?;
//! session.apply(&ControlEvent::SetFrontText { text: "HELLO".into() })?;
//!
//! // Live preview (resolution independent).
//! let svg = session.preview_svg(&SvgOptions::default());
//!
//! // Fixed-size export.
//! let renderer = ExportRenderer::new(ExportConfig::default());
//! let png: Vec<u8> = session.export(&renderer)?;
//! ```
//!
//! Both outputs are drawn from the same scene (see [`preview::build_scene`]),
//! so the export matches the preview up to anti-aliasing and font rendering.

pub mod color_model;
pub mod error;
pub mod event;
pub mod export;
pub mod gradient;
pub mod listing;
pub mod preview;
pub mod rotation;
pub mod session;
pub mod silhouette;
pub mod state;
pub mod text_model;

pub use error::{DesignError, DesignResult};
pub use session::Session;
pub use state::DesignState;

/// Everything a front end needs: import this in binaries and integration tests.
pub mod prelude {
    pub use crate::color_model::{ColorModel, GradientDirection, GradientSlot, PRESETS};
    pub use crate::error::{DesignError, DesignResult};
    pub use crate::event::ControlEvent;
    pub use crate::export::{default_export_file_name, ExportConfig, ExportRenderer};
    pub use crate::gradient::{resolve, ResolvedGradient};
    pub use crate::listing::ProductListing;
    pub use crate::preview::{build_scene, render_svg};
    pub use crate::rotation::{Face, RotationModel};
    pub use crate::session::Session;
    pub use crate::state::DesignState;
    pub use crate::text_model::TextModel;

    // Engine primitives front ends commonly touch.
    pub use atelier_engine::input::{InputEvent, MouseButton};
    pub use atelier_engine::paint::Color;
    pub use atelier_engine::svg::SvgOptions;
}
