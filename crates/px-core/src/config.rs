use crate::error::ConvertError;
use crate::palette::DEFAULT_CHARSET;

/// Default per-axis scale factor. Characters are taller than wide, so both
/// axes shrink by the same integer amount and the height collapses further
/// through the character cell geometry.
pub const DEFAULT_SCALE: u32 = 10;

/// Integer downsampling factors, one per axis. Both must be ≥ 1.
///
/// # Example
/// ```
/// use px_core::config::ScaleFactors;
/// let s = ScaleFactors::default();
/// assert_eq!((s.width, s.height), (10, 10));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleFactors {
    /// Horizontal shrink factor.
    pub width: u32,
    /// Vertical shrink factor.
    pub height: u32,
}

impl Default for ScaleFactors {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCALE,
            height: DEFAULT_SCALE,
        }
    }
}

/// Output representation selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Plain-text character grid, persisted as `.txt`.
    #[default]
    Monochrome,
    /// Raster image of tinted glyphs, persisted as PNG/JPEG/WEBP.
    Color,
}

impl RenderMode {
    /// Parse a user-facing mode name.
    ///
    /// # Errors
    /// Returns `ConvertError::Config` for anything but `mono`/`monochrome`
    /// and `color`.
    pub fn parse(s: &str) -> Result<Self, ConvertError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mono" | "monochrome" => Ok(Self::Monochrome),
            "color" | "colour" => Ok(Self::Color),
            other => Err(ConvertError::Config(format!(
                "unknown render mode '{other}' (expected 'mono' or 'color')"
            ))),
        }
    }
}

/// Immutable per-invocation configuration, threaded explicitly through the
/// pipeline (no ambient state).
///
/// # Example
/// ```
/// use px_core::config::ConvertConfig;
/// let config = ConvertConfig::default();
/// assert_eq!(config.charset, " .:-=+*#%@");
/// config.validate().unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Downsampling factors.
    pub scale: ScaleFactors,
    /// Palette characters, darkest → brightest.
    pub charset: String,
    /// Output representation.
    pub mode: RenderMode,
    /// User-supplied output path, resolved later against the mode's rules.
    pub output: Option<String>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            scale: ScaleFactors::default(),
            charset: DEFAULT_CHARSET.to_string(),
            mode: RenderMode::Monochrome,
            output: None,
        }
    }
}

impl ConvertConfig {
    /// Check invariants the rest of the pipeline assumes.
    ///
    /// # Errors
    /// Returns `ConvertError::Config` for a zero scale factor and
    /// `ConvertError::InvalidPalette` for an empty charset.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.scale.width == 0 || self.scale.height == 0 {
            return Err(ConvertError::Config(format!(
                "scale factors must be ≥ 1 (got {}×{})",
                self.scale.width, self.scale.height
            )));
        }
        if self.charset.is_empty() {
            return Err(ConvertError::InvalidPalette);
        }
        Ok(())
    }
}
