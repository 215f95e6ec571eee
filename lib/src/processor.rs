use crate::ascii::{RenderedOutput, Renderer};
use crate::buffer::PixelBuffer;
use crate::config::RenderConfig;
use crate::error::AsciiError;
use crate::grid::compute_grid_size;
use image::{DynamicImage, imageops};
use std::path::Path;

/// Resampling filter used to shrink the source onto the character grid
pub const RESAMPLE_FILTER: imageops::FilterType = imageops::FilterType::CatmullRom;

/// A finished conversion plus the source size it was computed from
#[derive(Debug, Clone)]
pub struct Conversion {
    pub output: RenderedOutput,
    pub source_width: u32,
    pub source_height: u32,
}

/// Decode an image file
pub fn decode(path: &Path) -> Result<DynamicImage, AsciiError> {
    image::open(path).map_err(|source| AsciiError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Resample an image to exactly `grid_width` x `grid_height` cells
///
/// Returns the RGB plane and the grayscale plane derived from it.
pub fn sample(
    image: &DynamicImage,
    grid_width: u32,
    grid_height: u32,
) -> Result<PixelBuffer, AsciiError> {
    if grid_width == 0 || grid_height == 0 {
        return Err(AsciiError::InvalidDimension(format!(
            "cannot resample to a {}x{} grid",
            grid_width, grid_height
        )));
    }

    let resized = image.resize_exact(grid_width, grid_height, RESAMPLE_FILTER);
    if resized.width() != grid_width || resized.height() != grid_height {
        return Err(AsciiError::Resize {
            expected: (grid_width, grid_height),
            actual: (resized.width(), resized.height()),
        });
    }

    Ok(PixelBuffer::from_rgb(resized.to_rgb8()))
}

/// Converts a decoded image to character art
///
/// Pipeline:
/// 1. Compute the character grid from the source aspect ratio
/// 2. Resample to the grid and derive grayscale
/// 3. Render glyphs and colors row by row
///
/// # Arguments
/// * `image` - Decoded source image
/// * `config` - Render settings
/// * `renderer` - Renderer holding the charset table
///
/// # Note
/// A grid height of 0 (very wide image, small width) is an
/// `InvalidDimension` error; it is not rounded up to one row.
pub fn process_image(
    image: &DynamicImage,
    config: &RenderConfig,
    renderer: &Renderer,
) -> Result<Conversion, AsciiError> {
    config.validate()?;
    // Unknown charsets fail before any resampling
    renderer.table().resolve(&config.charset)?;

    let (source_width, source_height) = (image.width(), image.height());
    let (grid_width, grid_height) = compute_grid_size(source_width, source_height, config.width)?;

    if grid_height == 0 {
        return Err(AsciiError::InvalidDimension(format!(
            "grid height is 0 for a {}x{} source at width {}",
            source_width, source_height, config.width
        )));
    }
    log::debug!(
        "sampling {}x{} source onto {}x{} grid",
        source_width,
        source_height,
        grid_width,
        grid_height
    );

    let buffer = sample(image, grid_width, grid_height)?;
    let output = renderer.render(&buffer, config)?;

    Ok(Conversion {
        output,
        source_width,
        source_height,
    })
}

/// Decode `path` and convert it with [`process_image`]
pub fn process_path(
    path: &Path,
    config: &RenderConfig,
    renderer: &Renderer,
) -> Result<Conversion, AsciiError> {
    let image = decode(path)?;
    process_image(&image, config, renderer)
}
