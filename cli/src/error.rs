use image_ascii::AsciiError;
use std::path::PathBuf;

/// Errors reported to the caller as `{"success": false, "error": ...}`
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    Usage(String),

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Output file exists (use --force to overwrite): {}", .0.display())]
    OutputExists(PathBuf),

    #[error("Failed to read config file '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Render(#[from] AsciiError),
}
