use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};
use px_core::config::ScaleFactors;
use px_core::error::ConvertError;
use px_core::frame::{GrayFrame, RgbFrame};

/// Grid dimensions produced by integer downsampling.
///
/// Floor division per axis: `cols = width / scale.width`,
/// `rows = height / scale.height`. A zero in either axis is a reported
/// configuration error — the pipeline refuses to proceed rather than emit an
/// empty output.
///
/// # Errors
/// Returns `ConvertError::DegenerateDimensions` if either axis collapses
/// to zero.
///
/// # Example
/// ```
/// use px_core::config::ScaleFactors;
/// use px_source::resize::target_size;
/// let scale = ScaleFactors { width: 10, height: 10 };
/// assert_eq!(target_size(640, 480, scale).unwrap(), (64, 48));
/// assert!(target_size(5, 5, scale).is_err());
/// ```
pub fn target_size(
    src_width: u32,
    src_height: u32,
    scale: ScaleFactors,
) -> Result<(u32, u32), ConvertError> {
    let cols = src_width / scale.width;
    let rows = src_height / scale.height;
    if cols == 0 || rows == 0 {
        return Err(ConvertError::DegenerateDimensions { rows, cols });
    }
    Ok((cols, rows))
}

/// Reusable resizer wrapping `fast_image_resize`.
///
/// Bilinear convolution, matching the linear interpolation of the original
/// pipeline. Sample values stay in [0,255] per channel and the output holds
/// exactly `cols × rows` samples.
///
/// # Example
/// ```
/// use px_core::frame::GrayFrame;
/// use px_source::resize::Resizer;
/// let mut r = Resizer::new();
/// let src = GrayFrame::new(100, 100);
/// let dst = r.downsample_gray(&src, 10, 10).unwrap();
/// assert_eq!((dst.width, dst.height), (10, 10));
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch copy of the source (the resize API needs a mutable slice).
    src_buf: Vec<u8>,
}

impl Resizer {
    /// Create a resizer with the bilinear filter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear)),
            src_buf: Vec::new(),
        }
    }

    /// Downsample a grayscale frame to `cols × rows`.
    ///
    /// # Errors
    /// Returns `ConvertError::Resize` if the resize operation fails.
    pub fn downsample_gray(
        &mut self,
        src: &GrayFrame,
        cols: u32,
        rows: u32,
    ) -> Result<GrayFrame, ConvertError> {
        let mut dst = GrayFrame::new(cols, rows);
        self.resize_into(
            &src.data,
            src.width,
            src.height,
            &mut dst.data,
            cols,
            rows,
            PixelType::U8,
        )?;
        Ok(dst)
    }

    /// Downsample an RGB frame to `cols × rows`.
    ///
    /// # Errors
    /// Returns `ConvertError::Resize` if the resize operation fails.
    pub fn downsample_rgb(
        &mut self,
        src: &RgbFrame,
        cols: u32,
        rows: u32,
    ) -> Result<RgbFrame, ConvertError> {
        let mut dst = RgbFrame::new(cols, rows);
        self.resize_into(
            &src.data,
            src.width,
            src.height,
            &mut dst.data,
            cols,
            rows,
            PixelType::U8x3,
        )?;
        Ok(dst)
    }

    #[allow(clippy::too_many_arguments)]
    fn resize_into(
        &mut self,
        src: &[u8],
        src_w: u32,
        src_h: u32,
        dst: &mut [u8],
        dst_w: u32,
        dst_h: u32,
        pixel_type: PixelType,
    ) -> Result<(), ConvertError> {
        self.src_buf.clear();
        self.src_buf.extend_from_slice(src);

        let src_image = Image::from_slice_u8(src_w, src_h, &mut self.src_buf, pixel_type)
            .map_err(|e| ConvertError::Resize(format!("invalid source dimensions: {e}")))?;
        let mut dst_image = Image::from_slice_u8(dst_w, dst_h, dst, pixel_type)
            .map_err(|e| ConvertError::Resize(format!("invalid target dimensions: {e}")))?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .map_err(|e| ConvertError::Resize(e.to_string()))?;
        Ok(())
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}
