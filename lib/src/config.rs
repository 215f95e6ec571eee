use crate::color::ColorMode;
use crate::error::AsciiError;

/// Configuration for a single render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Output width in characters, default 80
    pub width: u32,
    /// Name of the glyph ramp, default "standard"
    pub charset: String,
    /// Reverse the ramp (for light backgrounds), default false
    pub invert: bool,
    /// Cell coloring, default plain
    pub color_mode: ColorMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 80,
            charset: "standard".to_string(),
            invert: false,
            color_mode: ColorMode::Plain,
        }
    }
}

impl RenderConfig {
    /// Validates the configuration parameters
    ///
    /// The charset name is checked when the renderer resolves it.
    pub fn validate(&self) -> Result<(), AsciiError> {
        if self.width == 0 {
            return Err(AsciiError::InvalidDimension(
                "width must be at least 1, got 0".to_string(),
            ));
        }
        Ok(())
    }
}
