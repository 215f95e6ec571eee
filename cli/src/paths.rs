use image_ascii::ColorMode;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// File extension for a color mode's output
pub fn output_extension(mode: ColorMode) -> &'static str {
    match mode {
        ColorMode::Html => "html",
        ColorMode::Plain | ColorMode::Ansi256 => "txt",
    }
}

/// Derive where the converted file goes.
///
/// An explicit `.txt`/`.html` output is used verbatim. Any other explicit
/// output, or the input when no output is given, has its extension replaced
/// by `_<target>.<ext>`.
pub fn derive_output_path(
    input: &Path,
    output: Option<&Path>,
    target: &str,
    mode: ColorMode,
) -> PathBuf {
    if let Some(output) = output {
        let explicit = matches!(
            output.extension().and_then(|ext| ext.to_str()),
            Some("txt" | "html")
        );
        if explicit {
            return output.to_path_buf();
        }
        return with_target_suffix(output, target, mode);
    }
    with_target_suffix(input, target, mode)
}

fn with_target_suffix(path: &Path, target: &str, mode: ColorMode) -> PathBuf {
    let mut name: OsString = path.with_extension("").into_os_string();
    name.push(format!("_{}.{}", target, output_extension(mode)));
    PathBuf::from(name)
}
