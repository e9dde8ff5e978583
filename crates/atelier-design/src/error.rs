use std::fmt;

/// Errors surfaced by design operations and the export renderer.
///
/// Operations that fail leave the design state untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignError {
    /// A caller-supplied value was rejected (malformed color, out-of-range
    /// number, over-long text, unknown index or direction).
    InvalidInput { field: &'static str, reason: String },
    /// The export could not acquire a canvas, a font or an encoder.
    RenderUnavailable(String),
}

impl DesignError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        DesignError::InvalidInput { field, reason: reason.into() }
    }
}

impl fmt::Display for DesignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesignError::InvalidInput { field, reason } => {
                write!(f, "invalid {}: {}", field, reason)
            }
            DesignError::RenderUnavailable(reason) => write!(f, "render unavailable: {}", reason),
        }
    }
}

impl std::error::Error for DesignError {}

pub type DesignResult<T> = Result<T, DesignError>;
