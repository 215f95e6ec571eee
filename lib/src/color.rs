//! Per-cell color encoding for terminal and web output

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// How each rendered cell is colored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Glyph only
    #[default]
    Plain,
    /// xterm 256-color foreground escapes (6x6x6 cube)
    Ansi256,
    /// One inline-styled `<span>` per glyph
    Html,
}

impl ColorMode {
    /// Stable name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            ColorMode::Plain => "plain",
            ColorMode::Ansi256 => "ansi",
            ColorMode::Html => "html",
        }
    }

    /// Append `glyph`, wrapped in this mode's color markup, to `out`
    ///
    /// Pure function of `glyph` and `rgb`: every cell carries its own color
    /// and resets after itself, so nothing leaks into neighbouring cells.
    ///
    /// In HTML mode the glyphs `<`, `>` and `&` are written as entities, so
    /// those cells differ byte-wise from a raw-glyph rendering.
    pub fn encode_cell(&self, glyph: char, rgb: [u8; 3], out: &mut String) {
        match self {
            ColorMode::Plain => out.push(glyph),
            ColorMode::Ansi256 => {
                out.push_str(&format!("\x1b[38;5;{}m", rgb_to_ansi256(rgb)));
                out.push(glyph);
                out.push_str(ANSI_RESET);
            }
            ColorMode::Html => {
                out.push_str(&format!("<span style=\"color:{}\">", rgb_to_hex(rgb)));
                push_html_escaped(glyph, out);
                out.push_str("</span>");
            }
        }
    }
}

/// Convert RGB to an index in the xterm 6x6x6 color cube (16-231)
///
/// Each channel is scaled with `floor(c / 255 * 5)`.
pub fn rgb_to_ansi256(rgb: [u8; 3]) -> u8 {
    let [r, g, b] = rgb.map(|c| (c as u16 * 5 / 255) as u8);
    16 + 36 * r + 6 * g + b
}

/// Convert RGB to a lowercase `#rrggbb` string
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

fn push_html_escaped(glyph: char, out: &mut String) {
    match glyph {
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '&' => out.push_str("&amp;"),
        _ => out.push(glyph),
    }
}
