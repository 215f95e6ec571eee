//! Character grid sizing
//!
//! Monospace glyphs are roughly twice as tall as they are wide, so a grid with
//! the image's own aspect ratio would come out vertically stretched. Rows are
//! scaled by a fixed factor instead of measuring the font.

use crate::error::AsciiError;

/// Row scaling applied to the source aspect ratio
pub const GLYPH_ASPECT: f64 = 0.5;

/// Compute the character grid for a source image
///
/// `grid_width` is the requested width; `grid_height` is
/// `floor(target_width * source_height / source_width * 0.5)`.
///
/// # Arguments
/// * `source_width` - Source image width in pixels
/// * `source_height` - Source image height in pixels
/// * `target_width` - Requested width in characters
///
/// # Returns
/// `(grid_width, grid_height)`. The height is not clamped and may be 0 for
/// very wide images at small widths.
pub fn compute_grid_size(
    source_width: u32,
    source_height: u32,
    target_width: u32,
) -> Result<(u32, u32), AsciiError> {
    if target_width == 0 {
        return Err(AsciiError::InvalidDimension(
            "target width must be positive".to_string(),
        ));
    }
    if source_width == 0 || source_height == 0 {
        return Err(AsciiError::InvalidDimension(format!(
            "source image is {}x{}",
            source_width, source_height
        )));
    }

    let aspect = source_height as f64 / source_width as f64;
    let grid_height = (target_width as f64 * aspect * GLYPH_ASPECT).floor() as u32;

    Ok((target_width, grid_height))
}
