use std::path::Path;

use px_core::error::ConvertError;
use px_core::frame::{GrayFrame, RgbFrame};

/// Load an image as a single-channel intensity frame.
///
/// Any format the enabled `image` decoders support is accepted; color inputs
/// are reduced to luma by the decoder.
///
/// # Errors
/// Returns `ConvertError::ImageLoad` if the file cannot be read or decoded.
///
/// # Example
/// ```no_run
/// use px_source::image::load_gray;
/// use std::path::Path;
/// let frame = load_gray(Path::new("photo.png")).unwrap();
/// assert!(frame.width >= 1);
/// ```
pub fn load_gray(path: &Path) -> Result<GrayFrame, ConvertError> {
    let img = open(path)?;
    let luma = img.to_luma8();
    let (width, height) = luma.dimensions();
    log::debug!("loaded {} as {width}×{height} grayscale", path.display());
    Ok(GrayFrame {
        data: luma.into_raw(),
        width,
        height,
    })
}

/// Load an image as a three-channel RGB frame.
///
/// # Errors
/// Returns `ConvertError::ImageLoad` if the file cannot be read or decoded.
pub fn load_rgb(path: &Path) -> Result<RgbFrame, ConvertError> {
    let img = open(path)?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    log::debug!("loaded {} as {width}×{height} RGB", path.display());
    Ok(RgbFrame {
        data: rgb.into_raw(),
        width,
        height,
    })
}

fn open(path: &Path) -> Result<image::DynamicImage, ConvertError> {
    image::open(path).map_err(|e| ConvertError::ImageLoad {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_image_load_error() {
        let err = load_gray(Path::new("definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, ConvertError::ImageLoad { .. }));
    }
}
