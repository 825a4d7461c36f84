//! ASCII conversion engine for pixscii.
//!
//! Converts downsampled intensity frames to character grids.

pub mod convert;

pub use convert::{echo, render_mono};
