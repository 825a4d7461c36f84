use std::io::Write;

use px_core::error::ConvertError;
use px_core::frame::{CharGrid, GrayFrame};
use px_core::palette::PaletteLut;

/// Map a downsampled intensity frame to a character grid.
///
/// Row-major visitation; each cell gets the palette character for its
/// intensity. The returned grid has exactly the frame's dimensions.
///
/// # Errors
/// Returns `ConvertError::DimensionMismatch` if the frame's declared
/// dimensions disagree with its backing buffer. Malformed input is rejected,
/// never truncated or padded.
///
/// # Example
/// ```
/// use px_ascii::convert::render_mono;
/// use px_core::frame::GrayFrame;
/// use px_core::palette::{Palette, PaletteLut};
///
/// let mut frame = GrayFrame::new(2, 1);
/// frame.data.copy_from_slice(&[0, 255]);
/// let lut = PaletteLut::new(&Palette::new(" @").unwrap());
/// let grid = render_mono(&frame, &lut).unwrap();
/// assert_eq!(grid.row_string(0), " @");
/// ```
pub fn render_mono(frame: &GrayFrame, lut: &PaletteLut) -> Result<CharGrid, ConvertError> {
    frame.check()?;

    let mut grid = CharGrid::new(frame.width, frame.height);
    for y in 0..frame.height {
        for x in 0..frame.width {
            grid.set(x, y, lut.map(frame.intensity(x, y)));
        }
    }
    log::debug!("rendered {}×{} character grid", grid.width, grid.height);
    Ok(grid)
}

/// Echo a character grid row-by-row to a sink, one terminator per row.
///
/// Reproduces the interactive console echo of the monochrome pipeline. Kept
/// separate from `render_mono` so the conversion stays pure and testable
/// without a live console; callers pass a locked stdout for interface parity.
///
/// # Errors
/// Propagates any write error from the sink.
pub fn echo<W: Write>(grid: &CharGrid, sink: &mut W) -> std::io::Result<()> {
    let mut row = String::with_capacity(grid.width as usize + 1);
    for y in 0..grid.height {
        row.clear();
        for x in 0..grid.width {
            row.push(grid.get(x, y));
        }
        row.push('\n');
        sink.write_all(row.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use px_core::palette::Palette;

    fn lut() -> PaletteLut {
        PaletteLut::new(&Palette::new(" .:-=+*#%@").unwrap())
    }

    #[test]
    fn render_maps_extreme_intensities() {
        let mut frame = GrayFrame::new(2, 2);
        frame.data.copy_from_slice(&[0, 255, 128, 0]);
        let grid = render_mono(&frame, &lut()).unwrap();
        assert_eq!(grid.get(0, 0), ' ');
        assert_eq!(grid.get(1, 0), '@');
        assert_eq!(grid.get(0, 1), '=');
    }

    #[test]
    fn render_rejects_malformed_buffer() {
        let mut frame = GrayFrame::new(3, 3);
        frame.data.truncate(5);
        assert!(matches!(
            render_mono(&frame, &lut()),
            Err(ConvertError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn echo_writes_one_line_per_row() {
        let mut frame = GrayFrame::new(4, 2);
        frame.data.fill(255);
        let grid = render_mono(&frame, &lut()).unwrap();

        let mut out = Vec::new();
        echo(&grid, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "@@@@\n@@@@\n");
    }

    #[test]
    fn grid_dimensions_match_frame() {
        let frame = GrayFrame::new(64, 48);
        let grid = render_mono(&frame, &lut()).unwrap();
        assert_eq!((grid.width, grid.height), (64, 48));
        assert_eq!(grid.row_string(47).chars().count(), 64);
    }
}
