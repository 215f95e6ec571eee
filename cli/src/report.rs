//! JSON result printed to stdout, one object per invocation.

use image_ascii::Conversion;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize, PartialEq)]
pub struct Report {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Extra>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Extra {
    DryRun { dry_run: bool },
    Converted(ConversionDetails),
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ConversionDetails {
    pub charset: String,
    pub ascii_width: u32,
    pub ascii_height: u32,
    pub color_mode: &'static str,
    pub inverted: bool,
    pub original_size: [u32; 2],
}

impl Report {
    pub fn dry_run(output: &Path) -> Self {
        Self {
            success: true,
            output: Some(output.display().to_string()),
            output_size: None,
            extra: Some(Extra::DryRun { dry_run: true }),
            error: None,
        }
    }

    pub fn converted(output: &Path, output_size: u64, conversion: &Conversion) -> Self {
        let rendered = &conversion.output;
        Self {
            success: true,
            output: Some(output.display().to_string()),
            output_size: Some(output_size),
            extra: Some(Extra::Converted(ConversionDetails {
                charset: rendered.charset.clone(),
                ascii_width: rendered.grid_width,
                ascii_height: rendered.grid_height,
                color_mode: rendered.color_mode.name(),
                inverted: rendered.inverted,
                original_size: [conversion.source_width, conversion.source_height],
            })),
            error: None,
        }
    }

    pub fn failure(error: &dyn std::error::Error) -> Self {
        Self {
            success: false,
            output: None,
            output_size: None,
            extra: None,
            error: Some(error.to_string()),
        }
    }
}
