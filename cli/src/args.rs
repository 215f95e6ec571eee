//! CLI argument parsing with clap.

use clap::Parser;
use clap::builder::PossibleValuesParser;
use image_ascii::CHARSET_NAMES;
use std::path::PathBuf;

use crate::error::CliError;

/// Convert an image to ASCII art text, ANSI-colored text or an HTML page
#[derive(Parser, Debug)]
#[command(name = "image-ascii")]
#[command(version, about = "Convert images to ASCII art", long_about = None)]
pub struct Args {
    /// Input image path
    #[arg(long)]
    pub input: PathBuf,

    /// Target name, used as the output file suffix
    #[arg(long)]
    pub target: String,

    /// Output file path (a .txt/.html path is used as-is)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,

    /// Report the output path without converting
    #[arg(long)]
    pub dry_run: bool,

    /// Output width in characters (default: 80)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Character set (default: standard)
    #[arg(long, value_parser = PossibleValuesParser::new(CHARSET_NAMES))]
    pub charset: Option<String>,

    /// Invert brightness (for light backgrounds)
    #[arg(long)]
    pub invert: bool,

    /// Output ANSI 256-color text
    #[arg(long)]
    pub color: bool,

    /// Output an HTML page with colored spans (overrides --color)
    #[arg(long)]
    pub html: bool,

    /// Config file path (TOML)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Source format hint passed by the host; the decoder sniffs the file itself
    #[arg(long, hide = true)]
    pub input_format: Option<String>,
}

/// Turn a clap parse failure into a reportable error.
///
/// Only the first line of clap's message is kept; the usage block is noise
/// inside a JSON report.
pub fn usage_error(err: &clap::Error) -> CliError {
    let rendered = err.to_string();
    let message = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string();
    CliError::Usage(message)
}
