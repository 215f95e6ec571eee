use image_ascii::{Renderer, process_path};

use crate::args::Args;
use crate::error::CliError;
use crate::paths::derive_output_path;
use crate::report::Report;
use crate::settings::Settings;

/// Run one conversion: resolve settings, guard the output path, render, write.
pub fn run(args: &Args) -> Result<Report, CliError> {
    let settings = Settings::load(args.config.as_deref())?;
    let config = settings.render_config(args);

    if !args.input.exists() {
        return Err(CliError::InputNotFound(args.input.clone()));
    }

    let output_path = derive_output_path(
        &args.input,
        args.output.as_deref(),
        &args.target,
        config.color_mode,
    );

    if output_path.exists() && !args.force {
        return Err(CliError::OutputExists(output_path));
    }

    if args.dry_run {
        log::info!("dry run, would write {}", output_path.display());
        return Ok(Report::dry_run(&output_path));
    }

    let renderer = Renderer::default();
    let conversion = process_path(&args.input, &config, &renderer)?;
    let text = conversion.output.text();

    std::fs::write(&output_path, &text).map_err(|e| CliError::Write {
        path: output_path.clone(),
        source: e,
    })?;
    let output_size = std::fs::metadata(&output_path)
        .map_err(|e| CliError::Write {
            path: output_path.clone(),
            source: e,
        })?
        .len();

    log::info!(
        "wrote {} ({} bytes, {}x{} {})",
        output_path.display(),
        output_size,
        conversion.output.grid_width,
        conversion.output.grid_height,
        conversion.output.color_mode.name()
    );

    Ok(Report::converted(&output_path, output_size, &conversion))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Extra;
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use image_ascii::AsciiError;
    use std::path::{Path, PathBuf};

    fn write_image(dir: &Path, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(width, height, Rgb(rgb)).save(&path).unwrap();
        path
    }

    fn args(input: &Path, extra: &[&str]) -> Args {
        let input = input.to_str().unwrap();
        let mut argv = vec!["image-ascii", "--input", input, "--target", "ascii"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_convert_plain() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_image(dir.path(), "white.png", 8, 8, [255, 255, 255]);

        let report = run(&args(&input, &["--width", "4", "--charset", "simple"])).unwrap();

        let output = dir.path().join("white_ascii.txt");
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "####\n####");
        assert!(report.success);
        assert_eq!(report.output.as_deref(), Some(output.to_str().unwrap()));
        assert_eq!(report.output_size, Some(9));

        match report.extra {
            Some(Extra::Converted(details)) => {
                assert_eq!(details.charset, "simple");
                assert_eq!((details.ascii_width, details.ascii_height), (4, 2));
                assert_eq!(details.color_mode, "plain");
                assert!(!details.inverted);
                assert_eq!(details.original_size, [8, 8]);
            }
            other => panic!("unexpected extra: {:?}", other),
        }
    }

    #[test]
    fn test_convert_html() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_image(dir.path(), "red.png", 4, 4, [255, 0, 0]);

        let report = run(&args(&input, &["--width", "2", "--html"])).unwrap();

        let text = std::fs::read_to_string(dir.path().join("red_ascii.html")).unwrap();
        assert!(text.starts_with("<!DOCTYPE html>"));
        assert!(text.ends_with("</html>"));
        assert_eq!(text.matches("<span").count(), 2);
        assert!(text.contains("color:#ff0000"));
        assert!(report.success);
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&args(&dir.path().join("nope.png"), &[])).unwrap_err();
        assert!(matches!(err, CliError::InputNotFound(_)));
    }

    #[test]
    fn test_zero_height_grid_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_image(dir.path(), "wide.png", 1000, 10, [128, 128, 128]);

        let err = run(&args(&input, &["--width", "10"])).unwrap_err();
        assert!(matches!(err, CliError::Render(AsciiError::InvalidDimension(_))));
        assert!(!dir.path().join("wide_ascii.txt").exists());

        let report = Report::failure(&err);
        assert!(!report.success);
        assert!(report.error.unwrap().contains("grid height is 0"));
    }

    #[test]
    fn test_host_input_format_flag() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_image(dir.path(), "img.png", 4, 4, [0, 0, 0]);

        let report = run(&args(&input, &["--input-format", "png", "--dry-run"])).unwrap();
        assert!(report.success);
    }

    #[test]
    fn test_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_image(dir.path(), "img.png", 4, 4, [0, 0, 0]);
        let existing = dir.path().join("img_ascii.txt");
        std::fs::write(&existing, "keep me").unwrap();

        let err = run(&args(&input, &[])).unwrap_err();
        assert!(matches!(err, CliError::OutputExists(_)));
        assert_eq!(std::fs::read_to_string(&existing).unwrap(), "keep me");
    }

    #[test]
    fn test_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_image(dir.path(), "img.png", 4, 4, [0, 0, 0]);
        let existing = dir.path().join("img_ascii.txt");
        std::fs::write(&existing, "old").unwrap();

        let report = run(&args(&input, &["--force", "--width", "2"])).unwrap();
        assert!(report.success);
        assert_eq!(std::fs::read_to_string(&existing).unwrap(), "  ");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_image(dir.path(), "img.png", 4, 4, [0, 0, 0]);

        let report = run(&args(&input, &["--dry-run"])).unwrap();

        let output = dir.path().join("img_ascii.txt");
        assert_eq!(report.extra, Some(Extra::DryRun { dry_run: true }));
        assert_eq!(report.output.as_deref(), Some(output.to_str().unwrap()));
        assert!(!output.exists());
    }

    #[test]
    fn test_explicit_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_image(dir.path(), "img.png", 4, 4, [0, 0, 0]);
        let output = dir.path().join("art.txt");

        run(&args(&input, &["--output", output.to_str().unwrap()])).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn test_undecodable_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.png");
        std::fs::write(&input, b"not an image").unwrap();

        let err = run(&args(&input, &[])).unwrap_err();
        assert!(matches!(err, CliError::Render(AsciiError::Decode { .. })));
        assert!(!dir.path().join("broken_ascii.txt").exists());
    }

    #[test]
    fn test_unknown_charset_from_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_image(dir.path(), "img.png", 4, 4, [0, 0, 0]);
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "[render]\ncharset = \"runes\"\n").unwrap();

        let err = run(&args(&input, &["--config", config.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, CliError::Render(AsciiError::UnknownCharset(_))));
        assert!(!dir.path().join("img_ascii.txt").exists());
    }
}
