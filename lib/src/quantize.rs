/// Map an 8-bit grayscale intensity to an index into a ramp of `ramp_len` glyphs
///
/// Linear quantization: `min(floor(intensity * L / 256), L - 1)`. Equal-width
/// intensity buckets map to equal ramp steps, no gamma and no dithering.
///
/// # Arguments
/// * `intensity` - Grayscale value [0, 255]
/// * `ramp_len` - Number of glyphs in the ramp (L >= 2)
///
/// # Returns
/// Index in [0, L-1]. Intensity 255 reaches L-1 only for ramps of at most
/// 256 glyphs; longer ramps leave their top entries unused.
pub fn glyph_index(intensity: u8, ramp_len: usize) -> usize {
    debug_assert!(ramp_len > 0, "ramp must not be empty");

    let index = intensity as usize * ramp_len / 256;
    index.min(ramp_len.saturating_sub(1))
}
