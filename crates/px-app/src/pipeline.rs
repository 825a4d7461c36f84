use std::io::Write;
use std::path::{Path, PathBuf};

use px_ascii::convert::{echo, render_mono};
use px_core::config::{ConvertConfig, RenderMode};
use px_core::error::ConvertError;
use px_core::frame::{Canvas, GrayFrame};
use px_core::palette::{Palette, PaletteLut};
use px_export::rasterizer::GlyphAtlas;
use px_export::{font, path, writer};
use px_source::image::{load_gray, load_rgb};
use px_source::resize::{target_size, Resizer};

/// Run one full conversion: load → downsample → render → resolve → persist.
///
/// Strictly sequential; no stage overlaps another and nothing is persisted
/// unless every prior stage succeeded. Returns the path the result was
/// saved to.
///
/// # Errors
/// Any validation, decode, render, or write failure; all variants of
/// `ConvertError` are terminal for the invocation.
pub fn run(
    config: &ConvertConfig,
    image_path: &Path,
    font_path: Option<&Path>,
) -> Result<PathBuf, ConvertError> {
    config.validate()?;
    let palette = Palette::new(&config.charset)?;
    let lut = PaletteLut::new(&palette);

    match config.mode {
        RenderMode::Monochrome => run_mono(config, image_path, &lut),
        RenderMode::Color => run_color(config, image_path, font_path, &palette, &lut),
    }
}

fn run_mono(
    config: &ConvertConfig,
    image_path: &Path,
    lut: &PaletteLut,
) -> Result<PathBuf, ConvertError> {
    let frame = load_gray(image_path)?;
    let (cols, rows) = target_size(frame.width, frame.height, config.scale)?;
    log::info!("{}×{} → {cols}×{rows} grid", frame.width, frame.height);

    let small = Resizer::new().downsample_gray(&frame, cols, rows)?;
    let grid = render_mono(&small, lut)?;

    // Interactive echo, row by row, before anything touches the disk.
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    echo(&grid, &mut lock)
        .and_then(|()| lock.flush())
        .map_err(|e| ConvertError::OutputWrite {
            path: "<stdout>".to_string(),
            reason: e.to_string(),
        })?;

    let dest = path::resolve(config.output.as_deref(), config.mode)?;
    writer::write_text(&dest, &grid)?;
    Ok(dest.path)
}

fn run_color(
    config: &ConvertConfig,
    image_path: &Path,
    font_path: Option<&Path>,
    palette: &Palette,
    lut: &PaletteLut,
) -> Result<PathBuf, ConvertError> {
    let frame = load_rgb(image_path)?;
    let (cols, rows) = target_size(frame.width, frame.height, config.scale)?;
    log::info!("{}×{} → {cols}×{rows} grid", frame.width, frame.height);

    let small = Resizer::new().downsample_rgb(&frame, cols, rows)?;

    // Glyph choice and tint must come from the same downsampled sample:
    // intensity is derived from the reduced RGB, not a second gray pass.
    let mut gray = GrayFrame::new(cols, rows);
    for y in 0..rows {
        for x in 0..cols {
            gray.data[(y * cols + x) as usize] = small.luminance(x, y);
        }
    }
    let grid = render_mono(&gray, lut)?;

    let font_bytes = font::load_font_bytes(font_path)?;
    let atlas = GlyphAtlas::new(
        &font_bytes,
        config.scale.width,
        config.scale.height,
        palette,
    )?;
    let (canvas_w, canvas_h) = atlas.canvas_dimensions(cols, rows);
    let mut canvas = Canvas::new(canvas_w, canvas_h);
    atlas.render(&grid, &small, &mut canvas)?;

    let dest = path::resolve(config.output.as_deref(), config.mode)?;
    writer::write_raster(&dest, &canvas)?;
    Ok(dest.path)
}
