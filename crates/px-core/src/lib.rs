//! Configuration, types, and shared structures for pixscii.
//!
//! This crate contains all shared types, palette logic, and configuration
//! used across the pixscii workspace.

pub mod config;
pub mod error;
pub mod frame;
pub mod palette;

pub use config::{ConvertConfig, RenderMode, ScaleFactors};
pub use error::ConvertError;
pub use frame::{Canvas, CharGrid, GrayFrame, RgbFrame};
pub use palette::{Palette, PaletteLut};
