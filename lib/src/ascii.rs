use crate::buffer::PixelBuffer;
use crate::color::ColorMode;
use crate::config::RenderConfig;
use crate::error::AsciiError;
use crate::lut::{CharsetTable, GlyphRamp};
use rayon::prelude::*;

/// Fixed preamble emitted before the first row of an HTML document
pub const HTML_PREAMBLE: [&str; 7] = [
    "<!DOCTYPE html>",
    "<html><head>",
    "<style>",
    "body { background: #000; }",
    "pre { font-family: monospace; font-size: 10px; line-height: 1; }",
    "</style>",
    "</head><body><pre>",
];

/// Closing sequence emitted after the last row of an HTML document
pub const HTML_CLOSING: &str = "</pre></body></html>";

/// Result of one render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    /// One string per grid row, top to bottom
    pub lines: Vec<String>,
    pub grid_width: u32,
    pub grid_height: u32,
    pub color_mode: ColorMode,
    pub inverted: bool,
    pub charset: String,
}

impl RenderedOutput {
    /// Final text: rows joined by `\n`, wrapped in a document shell for HTML
    pub fn text(&self) -> String {
        match self.color_mode {
            ColorMode::Plain | ColorMode::Ansi256 => self.lines.join("\n"),
            ColorMode::Html => HTML_PREAMBLE
                .iter()
                .copied()
                .chain(self.lines.iter().map(String::as_str))
                .chain(std::iter::once(HTML_CLOSING))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Converts pixel buffers into character art
///
/// Owns the charset table it resolves ramp names against.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    table: CharsetTable,
}

impl Renderer {
    pub fn new(table: CharsetTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CharsetTable {
        &self.table
    }

    /// Render a buffer that has already been sampled to the character grid
    ///
    /// The grid is the buffer's own dimensions: one cell per pixel.
    ///
    /// # Arguments
    /// * `buffer` - RGB and grayscale planes at grid resolution
    /// * `config` - Render settings
    ///
    /// # Returns
    /// The rendered rows and their metadata, or an error for an unknown
    /// charset or invalid width. Nothing is produced on failure.
    pub fn render(
        &self,
        buffer: &PixelBuffer,
        config: &RenderConfig,
    ) -> Result<RenderedOutput, AsciiError> {
        config.validate()?;
        let ramp = self.table.resolve(&config.charset)?.apply(config.invert);
        let (width, height) = buffer.dimensions();

        log::debug!(
            "rendering {}x{} grid with '{}' ({} glyphs, inverted: {}, mode: {})",
            width,
            height,
            config.charset,
            ramp.len(),
            config.invert,
            config.color_mode.name()
        );

        // Rows are independent; collect keeps them in order
        let lines = (0..height)
            .into_par_iter()
            .map(|y| render_row(buffer, y, &ramp, config.color_mode))
            .collect();

        Ok(RenderedOutput {
            lines,
            grid_width: width,
            grid_height: height,
            color_mode: config.color_mode,
            inverted: config.invert,
            charset: config.charset.clone(),
        })
    }
}

/// Render one grid row, left to right
pub fn render_row(buffer: &PixelBuffer, y: u32, ramp: &GlyphRamp, mode: ColorMode) -> String {
    let mut line = String::with_capacity(buffer.width() as usize);
    for x in 0..buffer.width() {
        let glyph = ramp.glyph_for(buffer.intensity(x, y));
        mode.encode_cell(glyph, buffer.rgb(x, y), &mut line);
    }
    line
}
