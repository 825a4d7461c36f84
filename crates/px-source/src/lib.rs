//! Image input for pixscii: decoding and integer downsampling.

pub mod image;
pub mod resize;

pub use resize::{target_size, Resizer};
