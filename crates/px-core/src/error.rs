use thiserror::Error;

/// Errors surfaced by the conversion pipeline.
///
/// Every variant is terminal for the current invocation: the caller prints a
/// single diagnostic line and exits non-zero. Nothing is retried.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Invalid configuration value (zero scale factor, bad mode string).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Empty character palette.
    #[error("character palette must not be empty")]
    InvalidPalette,

    /// Input image could not be read or decoded.
    #[error("failed to load image {path}: {reason}")]
    ImageLoad {
        /// Path that failed to load.
        path: String,
        /// Decoder message.
        reason: String,
    },

    /// Scale factors reduced the image to zero rows or columns.
    #[error("effective output has zero rows/cols ({rows}×{cols}); scale factors exceed the image size")]
    DegenerateDimensions {
        /// Computed grid rows.
        rows: u32,
        /// Computed grid columns.
        cols: u32,
    },

    /// Resampling step failed.
    #[error("resize failed: {0}")]
    Resize(String),

    /// A buffer's declared dimensions do not match its data.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// What the caller declared.
        expected: String,
        /// What the buffer actually holds.
        actual: String,
    },

    /// Resolved output path exceeds the fixed maximum length.
    #[error("output path too long ({len} bytes, maximum {max})")]
    PathTooLong {
        /// Byte length of the resolved path.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },

    /// Output destination could not be created or written.
    #[error("failed to write {path}: {reason}")]
    OutputWrite {
        /// Destination path.
        path: String,
        /// Writer/encoder message.
        reason: String,
    },

    /// No usable glyph font for color rendering.
    #[error("no usable font: {0}")]
    FontLoad(String),
}
