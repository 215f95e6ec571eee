//! image-ascii - brightness-quantized image to character art renderer
//!
//! Each cell of a character grid gets a glyph picked from a brightness ramp
//! by its grayscale intensity, optionally colored with ANSI 256-color escapes
//! or HTML inline styles.
//!
//! # Example
//! ```no_run
//! use image_ascii::{process_path, ColorMode, RenderConfig, Renderer};
//! use std::path::Path;
//!
//! let config = RenderConfig {
//!     width: 100,
//!     color_mode: ColorMode::Ansi256,
//!     ..Default::default()
//! };
//! let conversion = process_path(Path::new("photo.jpg"), &config, &Renderer::default()).unwrap();
//! println!("{}", conversion.output.text());
//! ```

pub mod ascii;
pub mod buffer;
pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod lut;
pub mod processor;
pub mod quantize;

// Re-export main types for convenience
pub use ascii::{RenderedOutput, Renderer};
pub use buffer::PixelBuffer;
pub use color::ColorMode;
pub use config::RenderConfig;
pub use error::AsciiError;
pub use grid::compute_grid_size;
pub use lut::{CHARSET_NAMES, CharsetTable, GlyphRamp};
pub use processor::{Conversion, decode, process_image, process_path, sample};
pub use quantize::glyph_index;
