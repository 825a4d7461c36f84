use std::path::Path;

use px_core::error::ConvertError;

/// Common monospace font locations probed when the user gives no `--font`.
const SEARCH_PATHS: [&str; 8] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeMono.ttf",
    "/usr/share/fonts/truetype/noto/NotoSansMono-Regular.ttf",
    "/System/Library/Fonts/Menlo.ttc",
];

/// Load the glyph font for color rendering.
///
/// An explicit path wins; otherwise the common system locations are probed
/// in order. Only color mode ever calls this — monochrome output needs no
/// font.
///
/// # Errors
/// Returns `ConvertError::FontLoad` if the explicit path is unreadable or
/// no candidate exists.
pub fn load_font_bytes(explicit: Option<&Path>) -> Result<Vec<u8>, ConvertError> {
    if let Some(path) = explicit {
        return std::fs::read(path).map_err(|e| {
            ConvertError::FontLoad(format!("cannot read {}: {e}", path.display()))
        });
    }

    for candidate in SEARCH_PATHS {
        let path = Path::new(candidate);
        if path.exists() {
            log::info!("using system font {candidate}");
            return std::fs::read(path)
                .map_err(|e| ConvertError::FontLoad(format!("cannot read {candidate}: {e}")));
        }
    }

    Err(ConvertError::FontLoad(
        "no monospace font found in standard locations; pass --font <path.ttf>".to_string(),
    ))
}
