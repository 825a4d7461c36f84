use std::fs::File;
use std::io::{BufWriter, Write};

use image::{ImageFormat, RgbImage};
use px_core::error::ConvertError;
use px_core::frame::{Canvas, CharGrid};

use crate::path::{OutputDestination, OutputFormat};

/// Persist a character grid as UTF-8 text, one line per grid row.
///
/// The file handle lives only inside this call: opened, written through a
/// `BufWriter`, flushed, and released on every exit path. Each row ends in a
/// single `\n`; there is no trailing delimiter beyond that.
///
/// # Errors
/// Returns `ConvertError::OutputWrite` if the destination cannot be created
/// or written.
pub fn write_text(dest: &OutputDestination, grid: &CharGrid) -> Result<(), ConvertError> {
    let file = File::create(&dest.path).map_err(|e| output_err(dest, e.to_string()))?;
    let mut out = BufWriter::new(file);
    for y in 0..grid.height {
        out.write_all(grid.row_string(y).as_bytes())
            .and_then(|()| out.write_all(b"\n"))
            .map_err(|e| output_err(dest, e.to_string()))?;
    }
    out.flush().map_err(|e| output_err(dest, e.to_string()))?;
    log::info!("wrote {}×{} text grid to {}", grid.width, grid.height, dest.path.display());
    Ok(())
}

/// Persist a color canvas in the destination's raster format.
///
/// # Errors
/// Returns `ConvertError::OutputWrite` if the buffer shape is inconsistent
/// or the encoder fails.
pub fn write_raster(dest: &OutputDestination, canvas: &Canvas) -> Result<(), ConvertError> {
    let format = match dest.format {
        OutputFormat::Png => ImageFormat::Png,
        OutputFormat::Jpeg => ImageFormat::Jpeg,
        OutputFormat::Webp => ImageFormat::WebP,
        OutputFormat::Text => {
            return Err(output_err(dest, "text destination for raster data".into()))
        }
    };

    let img = RgbImage::from_raw(canvas.width, canvas.height, canvas.data.clone())
        .ok_or_else(|| output_err(dest, "canvas buffer does not match its dimensions".into()))?;
    img.save_with_format(&dest.path, format)
        .map_err(|e| output_err(dest, e.to_string()))?;
    log::info!(
        "wrote {}×{} raster to {}",
        canvas.width,
        canvas.height,
        dest.path.display()
    );
    Ok(())
}

fn output_err(dest: &OutputDestination, reason: String) -> ConvertError {
    ConvertError::OutputWrite {
        path: dest.path.display().to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use px_core::config::RenderMode;

    #[test]
    fn text_file_has_exact_grid_shape() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("grid").display().to_string();
        let dest = crate::path::resolve(Some(&base), RenderMode::Monochrome).unwrap();

        let mut grid = CharGrid::new(64, 48);
        grid.set(63, 47, '@');
        write_text(&dest, &grid).unwrap();

        let content = std::fs::read_to_string(&dest.path).unwrap();
        let lines: Vec<&str> = content.split_terminator('\n').collect();
        assert_eq!(lines.len(), 48);
        for line in &lines {
            assert_eq!(line.chars().count(), 64);
        }
        assert!(content.ends_with("@\n"));
    }

    #[test]
    fn raster_png_round_trips_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("cells").display().to_string();
        let dest = crate::path::resolve(Some(&base), RenderMode::Color).unwrap();
        assert_eq!(dest.format, OutputFormat::Png);

        let mut canvas = Canvas::new(20, 10);
        canvas.put(3, 3, (250, 120, 10));
        write_raster(&dest, &canvas).unwrap();

        let reloaded = image::open(&dest.path).unwrap().to_rgb8();
        assert_eq!(reloaded.dimensions(), (20, 10));
        assert_eq!(reloaded.get_pixel(3, 3).0, [250, 120, 10]);
    }

    #[test]
    fn unwritable_destination_is_output_write() {
        let dest = crate::path::resolve(Some("no/such/dir/"), RenderMode::Monochrome).unwrap();
        let grid = CharGrid::new(2, 2);
        assert!(matches!(
            write_text(&dest, &grid),
            Err(ConvertError::OutputWrite { .. })
        ));
    }
}
