use std::path::PathBuf;

/// Errors produced while resolving, sampling or rendering
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    /// Charset name is not registered in the table
    #[error("unknown charset '{0}'")]
    UnknownCharset(String),

    /// Target width is zero, a source dimension is zero, or planes disagree
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// A glyph ramp needs at least two characters
    #[error("glyph ramp must hold at least 2 characters, got {0}")]
    InvalidRamp(usize),

    /// Image could not be read or decoded
    #[error("failed to decode '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Resampler returned a buffer of the wrong size
    #[error("resize produced {actual:?}, expected {expected:?}")]
    Resize {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}
