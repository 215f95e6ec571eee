//! Glyph ramps and the charset lookup table
//!
//! Ramps are ordered from darkest (index 0) to brightest (index L-1).
//! The table is built once and handed to the renderer; nothing here is global
//! or mutable.

use std::collections::BTreeMap;

use crate::error::AsciiError;
use crate::quantize::glyph_index;

/// 10 levels, the classic ASCII ramp
pub const STANDARD: &str = " .:-=+*#%@";

/// 5 levels
pub const SIMPLE: &str = " .:*#";

/// Unicode shade blocks, 5 levels
pub const BLOCKS: &str = " ░▒▓█";

/// 69 levels, finest gradation
pub const DETAILED: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Names of the built-in charsets
pub const CHARSET_NAMES: [&str; 4] = ["standard", "simple", "blocks", "detailed"];

/// Ordered, brightness-monotonic sequence of glyphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    chars: Vec<char>,
}

impl GlyphRamp {
    /// Build a ramp from darkest to brightest
    pub fn new(chars: &str) -> Result<Self, AsciiError> {
        let chars: Vec<char> = chars.chars().collect();
        if chars.len() < 2 {
            return Err(AsciiError::InvalidRamp(chars.len()));
        }
        Ok(Self { chars })
    }

    /// Returns the ramp reversed when `invert` is set, otherwise an unchanged copy
    pub fn apply(&self, invert: bool) -> Self {
        let mut chars = self.chars.clone();
        if invert {
            chars.reverse();
        }
        Self { chars }
    }

    /// Glyph for an 8-bit grayscale intensity
    pub fn glyph_for(&self, intensity: u8) -> char {
        self.chars[glyph_index(intensity, self.chars.len())]
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false, a ramp holds at least two glyphs
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

/// Immutable name -> ramp map
#[derive(Debug, Clone)]
pub struct CharsetTable {
    ramps: BTreeMap<String, GlyphRamp>,
}

impl CharsetTable {
    /// Table holding the four built-in ramps
    pub fn builtin() -> Self {
        let ramps = [
            ("standard", STANDARD),
            ("simple", SIMPLE),
            ("blocks", BLOCKS),
            ("detailed", DETAILED),
        ]
        .into_iter()
        .map(|(name, chars)| {
            let ramp = GlyphRamp {
                chars: chars.chars().collect(),
            };
            (name.to_string(), ramp)
        })
        .collect();

        Self { ramps }
    }

    /// Returns a new table with `ramp` registered under `name`
    pub fn with_ramp(mut self, name: impl Into<String>, ramp: GlyphRamp) -> Self {
        self.ramps.insert(name.into(), ramp);
        self
    }

    /// Look up a ramp by name
    ///
    /// Unknown names are an error, never a fallback to a default ramp.
    pub fn resolve(&self, name: &str) -> Result<GlyphRamp, AsciiError> {
        self.ramps
            .get(name)
            .cloned()
            .ok_or_else(|| AsciiError::UnknownCharset(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ramps.keys().map(String::as_str)
    }
}

impl Default for CharsetTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ramps_resolve() {
        let table = CharsetTable::builtin();
        assert_eq!(table.resolve("standard").unwrap().len(), 10);
        assert_eq!(table.resolve("simple").unwrap().len(), 5);
        assert_eq!(table.resolve("blocks").unwrap().len(), 5);
        assert_eq!(table.resolve("detailed").unwrap().len(), 69);
    }

    #[test]
    fn test_builtin_names_match_table() {
        let table = CharsetTable::builtin();
        for name in CHARSET_NAMES {
            assert!(table.resolve(name).is_ok(), "missing {name}");
        }
        assert_eq!(table.names().count(), CHARSET_NAMES.len());
    }

    #[test]
    fn test_unknown_charset_is_error() {
        let table = CharsetTable::builtin();
        let err = table.resolve("fancy").unwrap_err();
        assert!(matches!(err, AsciiError::UnknownCharset(ref name) if name == "fancy"));
    }

    #[test]
    fn test_ramp_extremes() {
        let ramp = CharsetTable::builtin().resolve("standard").unwrap();
        assert_eq!(ramp.chars()[0], ' ');
        assert_eq!(ramp.chars()[9], '@');
        assert_eq!(ramp.glyph_for(0), ' ');
        assert_eq!(ramp.glyph_for(255), '@');
    }

    #[test]
    fn test_apply_without_invert_is_identity() {
        let ramp = GlyphRamp::new(SIMPLE).unwrap();
        assert_eq!(ramp.apply(false), ramp);
    }

    #[test]
    fn test_apply_invert_reverses() {
        let ramp = GlyphRamp::new(SIMPLE).unwrap();
        let inverted = ramp.apply(true);
        let len = ramp.len();
        for k in 0..len {
            assert_eq!(inverted.chars()[k], ramp.chars()[len - 1 - k]);
        }
        assert_eq!(inverted.apply(true), ramp);
    }

    #[test]
    fn test_inverted_extremes_swap() {
        let table = CharsetTable::builtin();
        for name in CHARSET_NAMES {
            let ramp = table.resolve(name).unwrap();
            let inverted = ramp.apply(true);
            assert_eq!(inverted.glyph_for(0), ramp.glyph_for(255));
            assert_eq!(inverted.glyph_for(255), ramp.glyph_for(0));
        }
    }

    #[test]
    fn test_inversion_law_symmetric_buckets() {
        // Power-of-two lengths split 0..=255 into mirror-symmetric buckets
        for chars in ["01", "0123", "01234567"] {
            let ramp = GlyphRamp::new(chars).unwrap();
            let inverted = ramp.apply(true);
            for i in 0..=255u8 {
                assert_eq!(inverted.glyph_for(i), ramp.glyph_for(255 - i), "i = {i}");
            }
        }
    }

    #[test]
    fn test_short_ramp_rejected() {
        assert!(matches!(GlyphRamp::new("#"), Err(AsciiError::InvalidRamp(1))));
        assert!(matches!(GlyphRamp::new(""), Err(AsciiError::InvalidRamp(0))));
    }

    #[test]
    fn test_custom_ramp_registration() {
        let table = CharsetTable::builtin().with_ramp("binary", GlyphRamp::new(" #").unwrap());
        let ramp = table.resolve("binary").unwrap();
        assert_eq!(ramp.glyph_for(10), ' ');
        assert_eq!(ramp.glyph_for(200), '#');
    }

    #[test]
    fn test_blocks_are_multibyte() {
        let ramp = CharsetTable::builtin().resolve("blocks").unwrap();
        assert_eq!(ramp.glyph_for(255), '█');
        assert_eq!(ramp.glyph_for(0), ' ');
    }
}
