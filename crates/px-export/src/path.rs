use std::path::PathBuf;

use px_core::config::RenderMode;
use px_core::error::ConvertError;

/// Fixed maximum byte length of a resolved output path.
///
/// The historical implementation built paths in fixed-size buffers; the same
/// bound is kept as an explicit, typed check on a growable string.
pub const MAX_PATH_BYTES: usize = 4096;

/// Default filename for monochrome output.
pub const DEFAULT_TEXT_NAME: &str = "output.txt";
/// Default filename for color output.
pub const DEFAULT_RASTER_NAME: &str = "output.png";

/// Raster extensions accepted as-is in color mode. Suffix match is
/// case-sensitive; anything else gets `.png` appended.
const COLOR_EXTENSIONS: [&str; 3] = [".png", ".jpeg", ".webp"];

/// Persisted output format, decided once at resolution time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// UTF-8 text grid.
    Text,
    /// PNG raster.
    Png,
    /// JPEG raster.
    Jpeg,
    /// WEBP raster.
    Webp,
}

/// Resolved output destination: concrete path plus format.
///
/// Derived once per invocation, never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputDestination {
    /// Where the result is persisted.
    pub path: PathBuf,
    /// How the result is encoded.
    pub format: OutputFormat,
}

/// Normalize a user-supplied output path for the given render mode.
///
/// Rules, in order:
/// 1. absent/empty input → mode default (`output.txt` / `output.png`);
/// 2. trailing path separator → append the mode's default filename;
/// 3. monochrome: append `.txt` unless the path already ends in it;
/// 4. color: append `.png` unless the suffix is exactly one of
///    `.png`/`.jpeg`/`.webp`. Appending never replaces, so `pic.gif`
///    resolves to `pic.gif.png` — a long-standing quirk kept on purpose;
/// 5. any result longer than [`MAX_PATH_BYTES`] fails, nothing is written.
///
/// Pure with respect to the filesystem; resolving twice with the same input
/// yields the same destination.
///
/// # Errors
/// Returns `ConvertError::PathTooLong` when rule 5 trips.
///
/// # Example
/// ```
/// use px_core::config::RenderMode;
/// use px_export::path::resolve;
/// let dest = resolve(Some("out/"), RenderMode::Monochrome).unwrap();
/// assert_eq!(dest.path.to_str().unwrap(), "out/output.txt");
/// ```
pub fn resolve(
    user_input: Option<&str>,
    mode: RenderMode,
) -> Result<OutputDestination, ConvertError> {
    let default_name = match mode {
        RenderMode::Monochrome => DEFAULT_TEXT_NAME,
        RenderMode::Color => DEFAULT_RASTER_NAME,
    };

    let raw = user_input.unwrap_or("");
    let mut path = if raw.is_empty() {
        default_name.to_string()
    } else if raw.ends_with(std::path::is_separator) {
        format!("{raw}{default_name}")
    } else {
        raw.to_string()
    };

    let format = match mode {
        RenderMode::Monochrome => {
            if !path.ends_with(".txt") {
                path.push_str(".txt");
            }
            OutputFormat::Text
        }
        RenderMode::Color => match COLOR_EXTENSIONS.iter().find(|ext| path.ends_with(*ext)) {
            Some(&".jpeg") => OutputFormat::Jpeg,
            Some(&".webp") => OutputFormat::Webp,
            Some(_) => OutputFormat::Png,
            None => {
                path.push_str(".png");
                OutputFormat::Png
            }
        },
    };

    if path.len() > MAX_PATH_BYTES {
        return Err(ConvertError::PathTooLong {
            len: path.len(),
            max: MAX_PATH_BYTES,
        });
    }

    Ok(OutputDestination {
        path: PathBuf::from(path),
        format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_uses_mode_default() {
        let mono = resolve(None, RenderMode::Monochrome).unwrap();
        assert_eq!(mono.path.to_str().unwrap(), "output.txt");
        assert_eq!(mono.format, OutputFormat::Text);

        let color = resolve(Some(""), RenderMode::Color).unwrap();
        assert_eq!(color.path.to_str().unwrap(), "output.png");
        assert_eq!(color.format, OutputFormat::Png);
    }

    #[test]
    fn trailing_separator_appends_default_name() {
        let dest = resolve(Some("out/"), RenderMode::Monochrome).unwrap();
        assert_eq!(dest.path.to_str().unwrap(), "out/output.txt");

        let dest = resolve(Some("renders/"), RenderMode::Color).unwrap();
        assert_eq!(dest.path.to_str().unwrap(), "renders/output.png");
    }

    #[test]
    fn monochrome_appends_txt_once() {
        let dest = resolve(Some("art"), RenderMode::Monochrome).unwrap();
        assert_eq!(dest.path.to_str().unwrap(), "art.txt");

        let dest = resolve(Some("art.txt"), RenderMode::Monochrome).unwrap();
        assert_eq!(dest.path.to_str().unwrap(), "art.txt");
    }

    #[test]
    fn color_recognizes_allowed_extensions() {
        for (input, format) in [
            ("pic.png", OutputFormat::Png),
            ("pic.jpeg", OutputFormat::Jpeg),
            ("pic.webp", OutputFormat::Webp),
        ] {
            let dest = resolve(Some(input), RenderMode::Color).unwrap();
            assert_eq!(dest.path.to_str().unwrap(), input);
            assert_eq!(dest.format, format);
        }
    }

    #[test]
    fn color_appends_png_to_bare_name() {
        let dest = resolve(Some("pic"), RenderMode::Color).unwrap();
        assert_eq!(dest.path.to_str().unwrap(), "pic.png");
        assert_eq!(dest.format, OutputFormat::Png);
    }

    // Documented quirk: an unrecognized extension is appended to, not
    // replaced. `pic.gif` becomes `pic.gif.png`.
    #[test]
    fn color_appends_to_unknown_extension() {
        let dest = resolve(Some("pic.gif"), RenderMode::Color).unwrap();
        assert_eq!(dest.path.to_str().unwrap(), "pic.gif.png");
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        let dest = resolve(Some("pic.PNG"), RenderMode::Color).unwrap();
        assert_eq!(dest.path.to_str().unwrap(), "pic.PNG.png");
        // .jpg is not in the allowed set either.
        let dest = resolve(Some("pic.jpg"), RenderMode::Color).unwrap();
        assert_eq!(dest.path.to_str().unwrap(), "pic.jpg.png");
    }

    #[test]
    fn resolution_is_idempotent_per_input() {
        for mode in [RenderMode::Monochrome, RenderMode::Color] {
            let a = resolve(Some("somewhere/out"), mode).unwrap();
            let b = resolve(Some("somewhere/out"), mode).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn over_long_path_is_rejected() {
        let long = "x".repeat(MAX_PATH_BYTES + 1);
        let err = resolve(Some(&long), RenderMode::Monochrome).unwrap_err();
        assert!(matches!(err, ConvertError::PathTooLong { .. }));
    }
}
