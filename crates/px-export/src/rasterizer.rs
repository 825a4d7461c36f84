use std::collections::HashMap;

use ab_glyph::{point, Font, FontRef, PxScale};
use px_core::error::ConvertError;
use px_core::frame::{Canvas, CharGrid, RgbFrame};
use px_core::palette::Palette;

/// Pre-rasterized glyph atlas for color output.
///
/// One grid cell covers exactly `cell_w × cell_h` canvas pixels — the same
/// block of source pixels the downsampler collapsed into the cell. Every
/// palette character is rasterized once at construction; rendering is then a
/// cache lookup per cell, with no glyph outlining in the pixel loop.
pub struct GlyphAtlas {
    cell_w: u32,
    cell_h: u32,
    /// Maps a palette char to its alpha buffer (size = cell_w * cell_h).
    glyph_cache: HashMap<char, Vec<u8>>,
    /// All-zero fallback for characters without an outline (e.g. space).
    empty_glyph: Vec<u8>,
}

impl GlyphAtlas {
    /// Build the atlas for a palette at the given cell geometry.
    ///
    /// Glyphs are scaled to the cell height and clipped to the cell; a
    /// character the font does not cover renders as background.
    ///
    /// # Errors
    /// Returns `ConvertError::FontLoad` if the font bytes are not a valid
    /// font, or `ConvertError::Config` for a zero-sized cell.
    pub fn new(
        font_data: &[u8],
        cell_w: u32,
        cell_h: u32,
        palette: &Palette,
    ) -> Result<Self, ConvertError> {
        if cell_w == 0 || cell_h == 0 {
            return Err(ConvertError::Config(format!(
                "glyph cell must be at least 1×1 (got {cell_w}×{cell_h})"
            )));
        }
        let font = FontRef::try_from_slice(font_data)
            .map_err(|e| ConvertError::FontLoad(format!("invalid font data: {e}")))?;
        let scale = PxScale::from(cell_h as f32);

        let mut atlas = Self {
            cell_w,
            cell_h,
            glyph_cache: HashMap::new(),
            empty_glyph: vec![0u8; (cell_w * cell_h) as usize],
        };

        for &ch in palette.chars() {
            atlas.cache_glyph(&font, scale, ch);
        }
        Ok(atlas)
    }

    fn cache_glyph(&mut self, font: &FontRef, scale: PxScale, ch: char) {
        // glyph_id 0 is .notdef; skip so uncovered chars stay background
        // instead of rendering a placeholder box.
        let gid = font.glyph_id(ch);
        if gid.0 == 0 {
            return;
        }

        let mut buffer = vec![0u8; (self.cell_w * self.cell_h) as usize];

        let ascent_px = font.ascent_unscaled() * scale.y / font.height_unscaled();
        let glyph = gid.with_scale_and_position(scale, point(0.0, ascent_px));

        if let Some(outline) = font.outline_glyph(glyph) {
            let bounds = outline.px_bounds();
            #[allow(clippy::cast_possible_wrap)]
            outline.draw(|x, y, v| {
                let px = (x as i32 + bounds.min.x as i32).max(0) as u32;
                let py = (y as i32 + bounds.min.y as i32).max(0) as u32;
                if px < self.cell_w && py < self.cell_h {
                    let idx = (py * self.cell_w + px) as usize;
                    buffer[idx] = (v * 255.0).round() as u8;
                }
            });
        }
        self.glyph_cache.insert(ch, buffer);
    }

    /// Canvas dimensions implied by a grid of the given size.
    #[must_use]
    pub fn canvas_dimensions(&self, grid_w: u32, grid_h: u32) -> (u32, u32) {
        (grid_w * self.cell_w, grid_h * self.cell_h)
    }

    /// Composite the grid's glyphs onto `canvas`, tinting each glyph with the
    /// matching cell color from `colors`. Untouched pixels keep the canvas's
    /// black fill. Strictly sequential, row-major.
    ///
    /// # Errors
    /// Returns `ConvertError::DimensionMismatch` if `colors` does not match
    /// the grid or `canvas` does not match the grid × cell geometry.
    pub fn render(
        &self,
        grid: &CharGrid,
        colors: &RgbFrame,
        canvas: &mut Canvas,
    ) -> Result<(), ConvertError> {
        if colors.width != grid.width || colors.height != grid.height {
            return Err(ConvertError::DimensionMismatch {
                expected: format!("{}×{} color cells", grid.width, grid.height),
                actual: format!("{}×{}", colors.width, colors.height),
            });
        }
        let (want_w, want_h) = self.canvas_dimensions(grid.width, grid.height);
        if canvas.width != want_w || canvas.height != want_h {
            return Err(ConvertError::DimensionMismatch {
                expected: format!("{want_w}×{want_h} canvas"),
                actual: format!("{}×{}", canvas.width, canvas.height),
            });
        }

        for gy in 0..grid.height {
            for gx in 0..grid.width {
                let alpha = self
                    .glyph_cache
                    .get(&grid.get(gx, gy))
                    .unwrap_or(&self.empty_glyph);
                let (r, g, b) = colors.pixel(gx, gy);

                let x0 = gx * self.cell_w;
                let y0 = gy * self.cell_h;
                for cy in 0..self.cell_h {
                    for cx in 0..self.cell_w {
                        let a = alpha[(cy * self.cell_w + cx) as usize];
                        if a == 0 {
                            continue;
                        }
                        // Over a black fill the blend reduces to fg × alpha.
                        let af = u32::from(a);
                        canvas.put(
                            x0 + cx,
                            y0 + cy,
                            (
                                ((u32::from(r) * af) / 255) as u8,
                                ((u32::from(g) * af) / 255) as u8,
                                ((u32::from(b) * af) / 255) as u8,
                            ),
                        );
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::load_font_bytes;

    // Atlas tests depend on a system font being discoverable; absence is a
    // valid environment, so they bail out quietly instead of failing.
    fn atlas(cell: u32) -> Option<GlyphAtlas> {
        let font = load_font_bytes(None).ok()?;
        let palette = Palette::new(" .:-=+*#%@").ok()?;
        GlyphAtlas::new(&font, cell, cell, &palette).ok()
    }

    #[test]
    fn canvas_dimensions_scale_by_cell() {
        let Some(atlas) = atlas(10) else { return };
        assert_eq!(atlas.canvas_dimensions(64, 48), (640, 480));
    }

    #[test]
    fn dense_glyph_marks_canvas_with_cell_color() {
        let Some(atlas) = atlas(12) else { return };

        let mut grid = CharGrid::new(2, 1);
        grid.set(0, 0, '@');
        grid.set(1, 0, ' ');

        let mut colors = RgbFrame::new(2, 1);
        colors.data.copy_from_slice(&[255, 0, 0, 0, 255, 0]);

        let mut canvas = Canvas::new(24, 12);
        atlas.render(&grid, &colors, &mut canvas).unwrap();

        // The '@' cell must contain red-tinted strokes, never green or blue.
        let mut saw_ink = false;
        for y in 0..12 {
            for x in 0..12 {
                let (r, g, b) = canvas.pixel(x, y);
                assert_eq!((g, b), (0, 0));
                saw_ink |= r > 0;
            }
        }
        assert!(saw_ink, "'@' glyph left no strokes in its cell");

        // The space cell stays pure background.
        for y in 0..12 {
            for x in 12..24 {
                assert_eq!(canvas.pixel(x, y), (0, 0, 0));
            }
        }
    }

    #[test]
    fn mismatched_canvas_rejected() {
        let Some(atlas) = atlas(10) else { return };
        let grid = CharGrid::new(4, 4);
        let colors = RgbFrame::new(4, 4);
        let mut canvas = Canvas::new(10, 10);
        assert!(matches!(
            atlas.render(&grid, &colors, &mut canvas),
            Err(ConvertError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn mismatched_colors_rejected() {
        let Some(atlas) = atlas(10) else { return };
        let grid = CharGrid::new(4, 4);
        let colors = RgbFrame::new(3, 4);
        let mut canvas = Canvas::new(40, 40);
        assert!(matches!(
            atlas.render(&grid, &colors, &mut canvas),
            Err(ConvertError::DimensionMismatch { .. })
        ));
    }
}
