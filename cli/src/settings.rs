//! Optional TOML defaults, overridden by command line flags.
//!
//! ```toml
//! [render]
//! width = 120
//! charset = "detailed"
//! invert = false
//! color = true
//! html = false
//! ```

use image_ascii::{ColorMode, RenderConfig};
use serde::Deserialize;
use std::path::Path;

use crate::args::Args;
use crate::error::CliError;

const DEFAULT_WIDTH: u32 = 80;
const DEFAULT_CHARSET: &str = "standard";

#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub render: RenderSettings,
}

#[derive(Debug, Deserialize, Default)]
pub struct RenderSettings {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub charset: Option<String>,
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub color: bool,
    #[serde(default)]
    pub html: bool,
}

impl Settings {
    /// Load settings from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let Some(path) = path else {
            return Ok(Settings::default());
        };

        let content = std::fs::read_to_string(path).map_err(|e| CliError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let settings: Settings = toml::from_str(&content).map_err(|e| CliError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Merge flags over file settings into a render configuration.
    ///
    /// The charset name is passed through untouched; an unknown name from the
    /// file surfaces as a render error.
    pub fn render_config(&self, args: &Args) -> RenderConfig {
        let file = &self.render;
        let html = args.html || file.html;
        let color = args.color || file.color;

        let color_mode = if html {
            ColorMode::Html
        } else if color {
            ColorMode::Ansi256
        } else {
            ColorMode::Plain
        };

        RenderConfig {
            width: args.width.or(file.width).unwrap_or(DEFAULT_WIDTH),
            charset: args
                .charset
                .clone()
                .or_else(|| file.charset.clone())
                .unwrap_or_else(|| DEFAULT_CHARSET.to_string()),
            invert: args.invert || file.invert,
            color_mode,
        }
    }
}
